use crate::{ArchiveError, ArchiveResult};
use std::path::PathBuf;
use url::Url;

/// Branch whose snapshot is downloaded, and whose name suffixes the
/// archive's root folder. Snapshots are always taken from the default
/// branch, whatever branch the original URL names.
pub const DEFAULT_BRANCH: &str = "main";

/// A parsed repository-mirroring job
///
/// Derived from a source-hosting URL of the shape
/// `/user/repo[/tree/<branch>[/sub/path...]]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveJob {
    /// Repository owner
    pub user: String,

    /// Repository name
    pub repo: String,

    /// Branch named in the URL, when the URL uses the `/tree/` shape
    pub branch: Option<String>,

    /// Path segments of interest beyond `user/repo/tree/<branch>`
    pub sub_path: Vec<String>,
}

impl ArchiveJob {
    /// Parses a job from a repository URL path
    ///
    /// # Returns
    ///
    /// * `Ok(ArchiveJob)` - The URL names at least `user/repo`
    /// * `Err(ArchiveError::InvalidUrl)` - Too few path segments
    pub fn from_url(url: &Url) -> ArchiveResult<Self> {
        let segments: Vec<&str> = url
            .path()
            .trim_matches('/')
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        if segments.len() < 2 {
            return Err(ArchiveError::InvalidUrl(url.to_string()));
        }

        let user = segments[0].to_string();
        let repo = segments[1].to_string();

        let (branch, sub_path) = if segments.len() > 2 && segments[2] == "tree" {
            let branch = segments.get(3).map(|s| s.to_string());
            let sub_start = if branch.is_some() { 4 } else { 3 };
            let sub_path = segments[sub_start..]
                .iter()
                .map(|s| s.to_string())
                .collect();
            (branch, sub_path)
        } else {
            (None, Vec::new())
        };

        Ok(Self {
            user,
            repo,
            branch,
            sub_path,
        })
    }

    /// The download URL for the repository's default-branch ZIP snapshot
    pub fn archive_url(&self) -> String {
        format!(
            "https://github.com/{}/{}/archive/refs/heads/{}.zip",
            self.user, self.repo, DEFAULT_BRANCH
        )
    }

    /// Relative path of the content of interest inside the extracted
    /// archive: `<repo>-<branch>` (the hosting platform's archive root
    /// naming) joined with the sub-path
    pub fn content_root(&self) -> PathBuf {
        let mut path = PathBuf::from(format!("{}-{}", self.repo, DEFAULT_BRANCH));
        for segment in &self.sub_path {
            path.push(segment);
        }
        path
    }

    /// Name of the final output directory under the docs root
    ///
    /// `{repo} - {sub - path - segments}`, or just `{repo}` when the URL
    /// named no sub-path.
    pub fn destination_name(&self) -> String {
        if self.sub_path.is_empty() {
            self.repo.clone()
        } else {
            format!("{} - {}", self.repo, self.sub_path.join(" - "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(url: &str) -> ArchiveJob {
        ArchiveJob::from_url(&Url::parse(url).unwrap()).unwrap()
    }

    #[test]
    fn test_parse_bare_repo() {
        let job = job("https://github.com/tokio-rs/tokio");
        assert_eq!(job.user, "tokio-rs");
        assert_eq!(job.repo, "tokio");
        assert_eq!(job.branch, None);
        assert!(job.sub_path.is_empty());
    }

    #[test]
    fn test_parse_tree_with_sub_path() {
        let job = job("https://github.com/user/repo/tree/main/docs/guide");
        assert_eq!(job.branch.as_deref(), Some("main"));
        assert_eq!(job.sub_path, vec!["docs", "guide"]);
    }

    #[test]
    fn test_parse_tree_other_branch() {
        let job = job("https://github.com/user/repo/tree/master/docs");
        assert_eq!(job.branch.as_deref(), Some("master"));
        assert_eq!(job.sub_path, vec!["docs"]);
    }

    #[test]
    fn test_parse_tree_without_branch() {
        let job = job("https://github.com/user/repo/tree");
        assert_eq!(job.branch, None);
        assert!(job.sub_path.is_empty());
    }

    #[test]
    fn test_parse_rejects_short_paths() {
        let result = ArchiveJob::from_url(&Url::parse("https://github.com/onlyuser").unwrap());
        assert!(matches!(result, Err(ArchiveError::InvalidUrl(_))));
    }

    #[test]
    fn test_archive_url_always_default_branch() {
        let job = job("https://github.com/user/repo/tree/v2-beta/docs");
        assert_eq!(
            job.archive_url(),
            "https://github.com/user/repo/archive/refs/heads/main.zip"
        );
    }

    #[test]
    fn test_content_root() {
        let job = job("https://github.com/user/repo/tree/main/docs/api");
        assert_eq!(job.content_root(), PathBuf::from("repo-main/docs/api"));
    }

    #[test]
    fn test_content_root_bare_repo() {
        let job = job("https://github.com/user/repo");
        assert_eq!(job.content_root(), PathBuf::from("repo-main"));
    }

    #[test]
    fn test_destination_name_with_sub_path() {
        let job = job("https://github.com/user/repo/tree/main/docs/guide");
        assert_eq!(job.destination_name(), "repo - docs - guide");
    }

    #[test]
    fn test_destination_name_bare_repo() {
        let job = job("https://github.com/user/repo");
        assert_eq!(job.destination_name(), "repo");
    }
}
