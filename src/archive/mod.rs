//! Archive fallback for source-hosting platforms
//!
//! Crawling a repository's file browser page-by-page would mirror the
//! hosting site's chrome, not the documentation. For github.com URLs the
//! crawler instead downloads the repository's default-branch ZIP
//! snapshot, extracts it into a private temporary directory, and moves
//! the sub-path of interest into the output tree.
//!
//! Every failure in this module aborts only the archive job: the
//! temporary directory is removed on every exit path (the `TempDir`
//! guard owns it), and the surrounding crawl continues.

mod job;

pub use job::{ArchiveJob, DEFAULT_BRANCH};

use crate::{ArchiveError, ArchiveResult};
use futures::StreamExt;
use reqwest::Client;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use url::Url;

/// Host handled by the archive fallback instead of page crawling
pub const GITHUB_HOST: &str = "github.com";

/// Returns true if the URL's host is a known source-hosting platform
pub fn is_archive_host(url: &Url) -> bool {
    url.host_str() == Some(GITHUB_HOST)
}

/// Mirrors a repository's content directory for a github.com URL
///
/// Parses the job from the URL, then runs the download / extract /
/// relocate sequence against the platform's snapshot URL.
///
/// # Returns
///
/// * `Ok(Some(path))` - Content relocated to `path` under the docs root
/// * `Ok(None)` - The archive held no directory at the expected sub-path
///   (logged, not fatal)
/// * `Err(ArchiveError)` - The job failed; nothing was left behind
pub async fn mirror_repository(
    client: &Client,
    url: &Url,
    docs_root: &Path,
) -> ArchiveResult<Option<PathBuf>> {
    let job = ArchiveJob::from_url(url)?;
    let archive_url = job.archive_url();
    run_archive_job(client, &archive_url, &job, docs_root).await
}

/// Runs the download / extract / relocate sequence for one archive job
///
/// The archive URL is a parameter (rather than derived from the job) so
/// callers can point the sequence at any snapshot endpoint.
///
/// The temporary working directory is created *under the docs root*,
/// which keeps the final relocation a same-filesystem rename.
pub async fn run_archive_job(
    client: &Client,
    archive_url: &str,
    job: &ArchiveJob,
    docs_root: &Path,
) -> ArchiveResult<Option<PathBuf>> {
    std::fs::create_dir_all(docs_root)?;

    // The guard removes the directory and its contents when it drops,
    // on success and on every early return below.
    let tmp = tempfile::tempdir_in(docs_root)?;

    let zip_path = tmp.path().join("repo.zip");
    download_archive(client, archive_url, &zip_path).await?;

    let extract_dir = tmp.path().join("extracted");
    extract_archive(&zip_path, &extract_dir)?;

    let content_path = extract_dir.join(job.content_root());
    if !content_path.is_dir() {
        tracing::warn!(
            "Content path {} not present in archive, skipping move",
            job.content_root().display()
        );
        return Ok(None);
    }

    let dest = docs_root.join(job.destination_name());
    if dest.exists() {
        // Re-mirroring replaces the previous tree, matching the
        // overwrite semantics of the page writer.
        std::fs::remove_dir_all(&dest)?;
    }
    std::fs::rename(&content_path, &dest)?;

    Ok(Some(dest))
}

/// Streams the archive download to disk
async fn download_archive(client: &Client, archive_url: &str, dest: &Path) -> ArchiveResult<()> {
    tracing::debug!("Downloading archive from {}", archive_url);

    let response = client.get(archive_url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(ArchiveError::Download {
            url: archive_url.to_string(),
            status: status.as_u16(),
        });
    }

    let mut file = tokio::fs::File::create(dest).await?;
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        file.write_all(&chunk).await?;
    }
    file.flush().await?;

    Ok(())
}

/// Extracts the downloaded ZIP into the given directory
///
/// Corrupt archives surface as [`ArchiveError::Extract`], distinct from
/// transport and filesystem failures.
fn extract_archive(zip_path: &Path, dest: &Path) -> ArchiveResult<()> {
    let file = std::fs::File::open(zip_path)?;
    let mut archive = zip::ZipArchive::new(file)?;
    archive.extract(dest)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_archive_host() {
        let github = Url::parse("https://github.com/user/repo").unwrap();
        assert!(is_archive_host(&github));

        let other = Url::parse("https://example.com/user/repo").unwrap();
        assert!(!is_archive_host(&other));

        // Raw content host is not the browsing host
        let raw = Url::parse("https://raw.githubusercontent.com/user/repo/x.md").unwrap();
        assert!(!is_archive_host(&raw));
    }

    #[test]
    fn test_extract_archive_rejects_corrupt_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let zip_path = dir.path().join("bad.zip");
        std::fs::write(&zip_path, b"this is not a zip archive").unwrap();

        let result = extract_archive(&zip_path, &dir.path().join("out"));
        assert!(matches!(result, Err(ArchiveError::Extract(_))));
    }
}
