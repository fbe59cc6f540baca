//! desc-core: motor de publicación de descripciones por checkpoint
pub mod constants;
pub mod errors;
pub mod extract;
pub mod listener;
pub mod model;
pub mod publish;

pub use errors::SinkError;
pub use extract::{EmptyExtractor, FactExtractor};
pub use listener::{BufferListener, BuildListener, NullListener};
pub use model::{BuildContext, Checkpoint, Node, Publication};
pub use publish::{DescriptionRecord, DescriptionSetter, DescriptionSink, InMemorySink};

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::path::Path;
    use std::rc::Rc;

    use desc_domain::{DescriptionTemplate, EnvVars};
    use uuid::Uuid;

    use super::*;

    // Extractor cuyo resultado puede cambiar entre checkpoints (comparte un
    // RefCell con el test), como cambia el estado del workspace en un build
    // real entre setup y teardown.
    struct ScriptedExtractor {
        facts: Rc<RefCell<EnvVars>>,
    }

    impl FactExtractor for ScriptedExtractor {
        fn extract(&self, _workspace: &Path, _node: &Node, _existing_env: &EnvVars, _listener: &mut dyn BuildListener) -> EnvVars {
            self.facts.borrow().clone()
        }
    }

    // Sink que rechaza toda escritura, para validar la degradación.
    struct RejectingSink;

    impl DescriptionSink for RejectingSink {
        fn set_description(&mut self, _build_id: Uuid, _checkpoint: Checkpoint, _text: &str) -> Result<(), SinkError> {
            Err(SinkError::Rejected("offline".to_string()))
        }
    }

    fn git_facts(branch: &str, rev: &str, short: &str, author: &str) -> EnvVars {
        EnvVars::from_pairs([(constants::GIT_BRANCH, branch),
                             (constants::GIT_REVISION, rev),
                             (constants::GIT_REVISION_SHORT, short),
                             (constants::GIT_AUTHOR, author)]).unwrap()
    }

    #[test]
    fn missing_context_is_a_noop() {
        let mut setter = DescriptionSetter::new(DescriptionTemplate::new("x ${A}"), EmptyExtractor, InMemorySink::new());
        let pub_ = setter.publish(None, Checkpoint::PostSetup, &mut NullListener);
        assert!(pub_.is_skipped());
        assert!(pub_.contributed.is_empty());
        assert!(setter.sink().inner.is_empty());
    }

    #[test]
    fn publish_without_workspace_skips_extraction() {
        let env = EnvVars::from_pairs([("BUILD_NUMBER", "7")]).unwrap();
        let ctx = BuildContext::new(env);
        let facts = Rc::new(RefCell::new(git_facts("main", "r", "s", "a")));
        let mut setter = DescriptionSetter::new(DescriptionTemplate::new("#${BUILD_NUMBER} ${GIT_BRANCH}"),
                                                ScriptedExtractor { facts },
                                                InMemorySink::new());
        let pub_ = setter.pre_work(Some(&ctx), &mut NullListener);
        // Sin workspace/nodo no hay extracción: el token queda literal.
        assert_eq!(pub_.description.as_deref(), Some("#7 ${GIT_BRANCH}"));
        assert!(pub_.contributed.is_empty());
    }

    #[test]
    fn set_up_registers_contribution_in_context() {
        let ctx = BuildContext::new(EnvVars::new()).with_workspace("/ws", Node::new("node-1"));
        let mut ctx = ctx;
        let facts = Rc::new(RefCell::new(git_facts("main", "abc", "ab", "jdoe")));
        let mut setter = DescriptionSetter::new(DescriptionTemplate::new("${GIT_BRANCH} @ ${GIT_REVISION_SHORT}"),
                                                ScriptedExtractor { facts },
                                                InMemorySink::new());
        let pub_ = setter.set_up(&mut ctx, &mut NullListener);
        assert_eq!(pub_.description.as_deref(), Some("main @ ab"));
        // La contribución queda registrada con alcance build.
        assert_eq!(ctx.env.get(constants::GIT_BRANCH), Some("main"));
        assert_eq!(ctx.env.get(constants::GIT_AUTHOR), Some("jdoe"));
    }

    #[test]
    fn facts_win_over_snapshot_only_for_their_keys() {
        let env = EnvVars::from_pairs([("GIT_BRANCH", "stale"), ("JOB", "ci")]).unwrap();
        let mut ctx = BuildContext::new(env).with_workspace("/ws", Node::new("n"));
        let facts = Rc::new(RefCell::new(git_facts("fresh", "", "", "")));
        let mut setter = DescriptionSetter::new(DescriptionTemplate::new("${JOB}:${GIT_BRANCH}"),
                                                ScriptedExtractor { facts },
                                                InMemorySink::new());
        let pub_ = setter.set_up(&mut ctx, &mut NullListener);
        assert_eq!(pub_.description.as_deref(), Some("ci:fresh"));
    }

    #[test]
    fn publish_is_idempotent_for_fixed_inputs() {
        let env = EnvVars::from_pairs([("A", "1")]).unwrap();
        let ctx = BuildContext::new(env);
        let mut setter = DescriptionSetter::new(DescriptionTemplate::new("v${A} ${B}"), EmptyExtractor, InMemorySink::new());
        let first = setter.publish(Some(&ctx), Checkpoint::Teardown, &mut NullListener);
        let second = setter.publish(Some(&ctx), Checkpoint::Teardown, &mut NullListener);
        assert_eq!(first.description, second.description);
    }

    #[test]
    fn last_checkpoint_wins_in_sink() {
        let mut ctx = BuildContext::new(EnvVars::new()).with_workspace("/ws", Node::new("n"));
        let facts = Rc::new(RefCell::new(git_facts("main", "111", "1", "a")));
        let script = Rc::clone(&facts);
        let mut setter = DescriptionSetter::new(DescriptionTemplate::new("rev=${GIT_REVISION}"),
                                                ScriptedExtractor { facts },
                                                InMemorySink::new());
        setter.set_up(&mut ctx, &mut NullListener);
        // La revisión cambió durante el build.
        *script.borrow_mut() = git_facts("main", "222", "2", "a");
        setter.tear_down(Some(&ctx), &mut NullListener);

        let sink = setter.sink();
        assert_eq!(sink.current(ctx.build_id), Some("rev=222"));
        let history = sink.history(ctx.build_id);
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].checkpoint, Checkpoint::PostSetup);
        assert_eq!(history[1].checkpoint, Checkpoint::Teardown);
    }

    #[test]
    fn sink_failure_degrades_to_listener_line() {
        let ctx = BuildContext::new(EnvVars::new());
        let mut setter = DescriptionSetter::new(DescriptionTemplate::new("d"), EmptyExtractor, RejectingSink);
        let mut listener = BufferListener::default();
        let pub_ = setter.publish(Some(&ctx), Checkpoint::Teardown, &mut listener);
        // La descripción se calculó igual; el fallo quedó en el log.
        assert_eq!(pub_.description.as_deref(), Some("d"));
        assert_eq!(listener.lines.len(), 1);
        assert!(listener.lines[0].contains("not persisted"));
    }
}
