use crate::config::AppConfig;
use crate::session::SessionGate;
use crate::upload::UploadQueue;
use derivative::Derivative;
use tokio::runtime::Handle;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Login,
    Dashboard,
    Upload,
}

#[derive(Derivative, Default)]
#[derivative(Debug)]
pub struct LoginForm {
    pub email: String,
    #[derivative(Debug = "ignore")]
    pub password: String,
    pub remember_device: bool,
}

impl LoginForm {
    pub fn can_submit(&self) -> bool {
        !self.email.trim().is_empty() && !self.password.is_empty()
    }
}

pub struct SessionState {
    pub page: Page,
    pub login_form: LoginForm,
    pub gate: SessionGate,
    pub queue: UploadQueue,
    pub search: String,
    pub is_dragging: bool,
}

impl SessionState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            page: Page::Login,
            login_form: LoginForm::default(),
            gate: SessionGate::new(config.login_delay),
            queue: UploadQueue::new(config.unknown_type_label.clone()),
            search: String::new(),
            is_dragging: false,
        }
    }

    pub fn submit_login(&mut self, runtime: &Handle) {
        if !self.login_form.can_submit() {
            return;
        }
        self.gate.begin_login(runtime);
    }

    // true when the login just completed and the page switched
    pub fn poll(&mut self) -> bool {
        if self.gate.poll() {
            self.page = Page::Dashboard;
            return true;
        }
        false
    }

    pub fn navigate(&mut self, page: Page) {
        if page == Page::Login {
            self.logout();
            return;
        }
        if !self.gate.is_authenticated() {
            return;
        }
        info!(?page, "Navigating");
        self.page = page;
    }

    pub fn logout(&mut self) {
        self.gate.logout();
        self.queue.clear();
        self.login_form = LoginForm::default();
        self.search.clear();
        self.is_dragging = false;
        self.page = Page::Login;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upload::SelectedFile;
    use std::time::Duration;

    fn filled_form(state: &mut SessionState) {
        state.login_form.email = "explorer@skyvault.io".into();
        state.login_form.password = "hunter2".into();
    }

    #[test]
    fn form_requires_both_fields() {
        let mut form = LoginForm::default();
        assert!(!form.can_submit());
        form.email = "  ".into();
        form.password = "x".into();
        assert!(!form.can_submit());
        form.email = "a@b".into();
        assert!(form.can_submit());
    }

    #[test]
    fn debug_output_hides_the_password() {
        let form = LoginForm {
            email: "explorer@skyvault.io".into(),
            password: "hunter2".into(),
            remember_device: true,
        };
        let printed = format!("{:?}", form);
        assert!(printed.contains("explorer@skyvault.io"));
        assert!(!printed.contains("hunter2"));
    }

    #[test]
    fn cannot_navigate_before_login() {
        let mut state = SessionState::new(&AppConfig::default());
        state.navigate(Page::Upload);
        assert_eq!(state.page, Page::Login);
    }

    #[tokio::test(start_paused = true)]
    async fn empty_form_does_not_start_login() {
        let mut state = SessionState::new(&AppConfig::default());
        state.submit_login(&Handle::current());
        assert!(!state.gate.is_logging_in());
    }

    #[tokio::test(start_paused = true)]
    async fn login_lands_on_dashboard_and_logout_resets() {
        let mut state = SessionState::new(&AppConfig::default());
        filled_form(&mut state);
        state.submit_login(&Handle::current());
        assert!(!state.poll());

        tokio::time::sleep(Duration::from_millis(1500)).await;
        assert!(state.poll());
        assert_eq!(state.page, Page::Dashboard);

        state.navigate(Page::Upload);
        state.queue.add_many(vec![SelectedFile::new("a.txt", 10, None)]);
        state.navigate(Page::Dashboard);
        assert_eq!(state.queue.len(), 1);

        state.logout();
        assert_eq!(state.page, Page::Login);
        assert!(state.queue.is_empty());
        assert!(!state.gate.is_authenticated());
        assert!(state.login_form.email.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn navigating_to_login_ends_the_session() {
        let mut state = SessionState::new(&AppConfig::default());
        filled_form(&mut state);
        state.submit_login(&Handle::current());
        tokio::time::sleep(Duration::from_millis(1500)).await;
        assert!(state.poll());
        state.queue.add_many(vec![SelectedFile::new("a.txt", 10, None)]);

        state.navigate(Page::Login);
        assert_eq!(state.page, Page::Login);
        assert!(!state.gate.is_authenticated());
        assert!(state.queue.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn logout_during_login_stays_on_login() {
        let mut state = SessionState::new(&AppConfig::default());
        filled_form(&mut state);
        state.submit_login(&Handle::current());
        state.logout();

        tokio::time::sleep(Duration::from_millis(1500)).await;
        assert!(!state.poll());
        assert_eq!(state.page, Page::Login);
    }
}
