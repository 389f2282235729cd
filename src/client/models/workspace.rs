use crate::client::models::experiment::ExperimentAction;
use crate::client::models::generation::{GenerationWorkflow, RequestKind, RequestTicket, Submission, WorkflowError};
use crate::client::models::prompt_list::PromptList;
use crate::client::models::session::Session;
use log::debug;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GateError {
    #[error("Please log in to enter prompts")]
    LoginRequired,
}

/// Popups shown over the workspace. Independent of loading and session state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Popups {
    pub login_prompt: bool,
    /// Open experiment popup, with the gallery index it was opened from.
    pub experiment: Option<usize>,
}

/// Prompt editor, request lifecycle and gallery of the main screen.
#[derive(Debug, Clone, Default)]
pub struct Workspace {
    prompts: PromptList,
    workflow: GenerationWorkflow,
    pub popups: Popups,
}

impl Workspace {
    pub fn prompts(&self) -> &PromptList {
        &self.prompts
    }

    pub fn workflow(&self) -> &GenerationWorkflow {
        &self.workflow
    }

    fn gate(&mut self, session: &Session) -> Result<(), GateError> {
        if session.is_authenticated() {
            Ok(())
        } else {
            self.popups.login_prompt = true;
            Err(GateError::LoginRequired)
        }
    }

    pub fn edit_prompt(&mut self, session: &Session, index: usize, text: String) -> Result<(), GateError> {
        self.gate(session)?;
        if !self.prompts.set(index, text) {
            debug!("[WORKSPACE] Ignoring edit of missing prompt {}", index);
        }
        Ok(())
    }

    pub fn add_prompt(&mut self, session: &Session) -> Result<(), GateError> {
        self.gate(session)?;
        self.prompts.push_empty();
        Ok(())
    }

    pub fn remove_prompt(&mut self, session: &Session, index: usize) -> Result<(), GateError> {
        self.gate(session)?;
        self.prompts.remove(index);
        Ok(())
    }

    /// Form submission. Unauthenticated: shows the login prompt and sends nothing.
    pub fn submit(&mut self, session: &Session) -> Result<Submission, WorkflowError> {
        self.gate(session).map_err(|_| WorkflowError::LoginRequired)?;
        self.workflow.begin(RequestKind::Generate, self.prompts.snapshot())
    }

    pub fn settle(&mut self, ticket: RequestTicket, result: Result<Vec<String>, String>) -> Result<RequestKind, WorkflowError> {
        self.workflow.settle(ticket, result)
    }

    /// Drops prompts, images and popups when the workspace screen is left.
    pub fn unmount(&mut self) {
        *self = Workspace { workflow: self.workflow.detached(), ..Workspace::default() };
    }

    pub fn open_experiment(&mut self, index: usize) {
        self.popups.experiment = Some(index);
    }

    pub fn close_experiment(&mut self) {
        self.popups.experiment = None;
    }

    pub fn dismiss_login_prompt(&mut self) {
        self.popups.login_prompt = false;
    }

    /// Runs an experiment action and closes the popup. Background removal resends the
    /// current prompt list; the image the popup was opened from is not part of the request.
    pub fn choose_experiment(&mut self, action: ExperimentAction) -> Result<Option<Submission>, WorkflowError> {
        let selected = self.popups.experiment.take();
        match action.request_kind() {
            Some(kind) => {
                debug!("[WORKSPACE] {} chosen for image {:?}", action, selected);
                self.workflow.begin(kind, self.prompts.snapshot()).map(Some)
            }
            None => {
                debug!("Experiment option clicked: {}", action);
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::utils::session_store::SessionStore;

    fn session(authenticated: bool) -> (tempfile::TempDir, Session) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flag.txt");
        std::fs::write(&path, if authenticated { "true" } else { "false" }).unwrap();
        let session = Session::initialize(SessionStore::file(path));
        (dir, session)
    }

    #[test]
    fn add_then_edit_while_authenticated() {
        let (_dir, s) = session(true);
        let mut ws = Workspace::default();
        ws.add_prompt(&s).unwrap();
        ws.add_prompt(&s).unwrap();
        ws.edit_prompt(&s, 1, "cat".into()).unwrap();
        assert_eq!(ws.prompts().as_slice(), &["".to_string(), "cat".to_string(), "".to_string()]);
        assert!(!ws.popups.login_prompt);
    }

    #[test]
    fn every_gated_operation_fails_closed() {
        let (_dir, s) = session(false);
        let mut ws = Workspace::default();

        assert_eq!(ws.edit_prompt(&s, 0, "cat".into()), Err(GateError::LoginRequired));
        assert!(ws.popups.login_prompt);
        ws.dismiss_login_prompt();

        assert_eq!(ws.add_prompt(&s), Err(GateError::LoginRequired));
        assert!(ws.popups.login_prompt);
        ws.dismiss_login_prompt();

        assert_eq!(ws.remove_prompt(&s, 0), Err(GateError::LoginRequired));
        assert_eq!(ws.submit(&s), Err(WorkflowError::LoginRequired));
        assert!(ws.popups.login_prompt);

        assert_eq!(ws.prompts(), &PromptList::new());
        assert!(!ws.workflow().is_loading());
    }

    #[test]
    fn submit_snapshots_prompts() {
        let (_dir, s) = session(true);
        let mut ws = Workspace::default();
        ws.edit_prompt(&s, 0, "a red fox".into()).unwrap();
        let sub = ws.submit(&s).unwrap();
        assert_eq!(sub.kind, RequestKind::Generate);
        assert_eq!(sub.request.text_prompts, vec!["a red fox".to_string()]);
        assert!(ws.workflow().is_loading());
    }

    #[test]
    fn remove_background_sends_prompts_and_closes_popup() {
        let (_dir, s) = session(true);
        let mut ws = Workspace::default();
        ws.edit_prompt(&s, 0, "castle".into()).unwrap();
        let first = ws.submit(&s).unwrap();
        ws.settle(first.ticket, Ok(vec!["aaa".into(), "bbb".into()])).unwrap();

        ws.open_experiment(1);
        let sub = ws.choose_experiment(ExperimentAction::RemoveBackground).unwrap().unwrap();
        assert_eq!(sub.kind, RequestKind::RemoveBackground);
        assert_eq!(sub.request.text_prompts, vec!["castle".to_string()]);
        assert_eq!(ws.popups.experiment, None);
    }

    #[test]
    fn unassigned_slot_is_inert() {
        let mut ws = Workspace::default();
        ws.open_experiment(0);
        assert_eq!(ws.choose_experiment(ExperimentAction::Unassigned(3)), Ok(None));
        assert!(!ws.workflow().is_loading());
        assert_eq!(ws.popups.experiment, None);
    }
}
