use clap::Parser;

/// Submission settings. Every value can come from a flag or from the
/// environment, which is how CI runners hand them over.
#[derive(Debug, Clone, Default, Parser)]
#[clap(name = "submit-application", about = "Submit a signed application payload")]
pub struct ApplicationConfig {
    #[clap(long, env = "APPLICATION_NAME")]
    pub name: Option<String>,
    #[clap(long, env = "APPLICATION_EMAIL")]
    pub email: Option<String>,
    #[clap(long, env = "APPLICATION_RESUME_LINK")]
    pub resume_link: Option<String>,

    // The CI-provided URLs win over the manually configured ones.
    #[clap(long, env = "GITHUB_REPOSITORY_URL")]
    pub repository_link: Option<String>,
    #[clap(long, env = "APPLICATION_REPOSITORY_LINK", hide = true)]
    pub application_repository_link: Option<String>,
    #[clap(long, env = "GITHUB_RUN_URL")]
    pub action_run_link: Option<String>,
    #[clap(long, env = "APPLICATION_ACTION_RUN_LINK", hide = true)]
    pub application_action_run_link: Option<String>,

    #[clap(long, env = "SIGNING_SECRET", hide_env_values = true)]
    pub signing_secret: Option<String>,
    #[clap(long, env = "SUBMISSION_URL")]
    pub submission_url: Option<String>,

    #[clap(long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,
}

impl ApplicationConfig {
    pub fn name(&self) -> Option<&str> {
        present(&self.name)
    }

    pub fn email(&self) -> Option<&str> {
        present(&self.email)
    }

    pub fn resume_link(&self) -> Option<&str> {
        present(&self.resume_link)
    }

    pub fn repository_link(&self) -> Option<&str> {
        present(&self.repository_link).or_else(|| present(&self.application_repository_link))
    }

    pub fn action_run_link(&self) -> Option<&str> {
        present(&self.action_run_link).or_else(|| present(&self.application_action_run_link))
    }

    pub fn signing_secret(&self) -> Option<&str> {
        present(&self.signing_secret)
    }

    pub fn submission_url(&self) -> Option<&str> {
        present(&self.submission_url)
    }
}

/// Empty values count as unset.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
