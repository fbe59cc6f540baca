/// Demo del ciclo de vida completo con stores in-memory: pre-work sin
/// workspace, post-setup con facts simulados, cambio de revisión y teardown.
fn run_lifecycle_demo() {
    use std::cell::RefCell;
    use std::path::Path;
    use std::rc::Rc;

    use desc_core::{constants, BufferListener, BuildContext, BuildListener, DescriptionSetter, FactExtractor, InMemorySink, Node};
    use desc_domain::{DescriptionTemplate, EnvVars};
    use uuid::Uuid;

    // Extractor simulado: el demo mueve la revisión entre checkpoints, como
    // lo haría un paso intermedio del build sobre el workspace real.
    struct DemoExtractor {
        facts: Rc<RefCell<EnvVars>>,
    }
    impl FactExtractor for DemoExtractor {
        fn extract(&self, _workspace: &Path, _node: &Node, _existing_env: &EnvVars, _listener: &mut dyn BuildListener) -> EnvVars {
            self.facts.borrow().clone()
        }
    }

    let facts = |rev: &str| {
        EnvVars::from_pairs([(constants::GIT_BRANCH, "main"),
                             (constants::GIT_REVISION, rev),
                             (constants::GIT_REVISION_SHORT, &rev[..7.min(rev.len())]),
                             (constants::GIT_AUTHOR, "jdoe")]).expect("demo facts")
    };

    let script = Rc::new(RefCell::new(facts("1111111aaaaaaa")));
    let extractor = DemoExtractor { facts: Rc::clone(&script) };
    let mut setter = DescriptionSetter::new(DescriptionTemplate::new("Build ${BUILD_NUMBER}: ${GIT_BRANCH} @ ${GIT_REVISION_SHORT} by ${GIT_AUTHOR}"),
                                            extractor,
                                            InMemorySink::new());
    let mut listener = BufferListener::default();

    let env = EnvVars::from_pairs([("BUILD_NUMBER", "42")]).expect("demo env");
    let mut ctx = BuildContext::new(env);
    let build_id: Uuid = ctx.build_id;

    let pre = setter.pre_work(Some(&ctx), &mut listener);
    println!("pre-work    -> {}", pre.description.unwrap_or_default());

    ctx = ctx.with_workspace("/tmp/ws-demo", Node::new("agent-1"));
    let setup = setter.set_up(&mut ctx, &mut listener);
    println!("post-setup  -> {}", setup.description.unwrap_or_default());

    *script.borrow_mut() = facts("2222222bbbbbbb");
    let teardown = setter.tear_down(Some(&ctx), &mut listener);
    println!("teardown    -> {}", teardown.description.unwrap_or_default());

    println!("-- historial del sink --");
    for record in setter.sink().history(build_id) {
        println!("{}", serde_json::to_string(&record).expect("record json"));
    }
    for line in listener.lines {
        println!("listener: {line}");
    }
}

fn main() {
    run_lifecycle_demo();
}
