//! Uso end-to-end del stack publicado: core + backend SCM real (en su
//! variante no soportada, que no toca disco) contra el sink in-memory.

use desc_core::{BuildContext, DescriptionSetter, InMemorySink, Node, NullListener};
use desc_domain::{DescriptionTemplate, EnvVars};
use desc_scm::{Scm, ScmFactExtractor};

#[test]
fn unsupported_scm_still_publishes_from_plain_env() {
    let extractor = ScmFactExtractor::new(Scm::Unsupported);
    let mut setter = DescriptionSetter::new(DescriptionTemplate::new("Job ${JOB_NAME} #${BUILD_NUMBER} (${GIT_BRANCH})"),
                                            extractor,
                                            InMemorySink::new());

    let env = EnvVars::from_pairs([("JOB_NAME", "nightly"), ("BUILD_NUMBER", "9")]).unwrap();
    let mut ctx = BuildContext::new(env).with_workspace("/tmp/ws", Node::new("agent"));

    let setup = setter.set_up(&mut ctx, &mut NullListener);
    // Backend no soportado: contribución vacía y token de rama literal.
    assert!(setup.contributed.is_empty());
    assert_eq!(setup.description.as_deref(), Some("Job nightly #9 (${GIT_BRANCH})"));

    // El entorno del contexto no ganó claves GIT_*.
    assert!(ctx.env.get("GIT_BRANCH").is_none());

    setter.tear_down(Some(&ctx), &mut NullListener);
    assert_eq!(setter.sink().current(ctx.build_id), Some("Job nightly #9 (${GIT_BRANCH})"));
}

#[test]
fn two_builds_do_not_share_sink_state() {
    let mut setter = DescriptionSetter::new(DescriptionTemplate::new("#${N}"),
                                            ScmFactExtractor::new(Scm::Unsupported),
                                            InMemorySink::new());

    let ctx_a = BuildContext::new(EnvVars::from_pairs([("N", "1")]).unwrap());
    let ctx_b = BuildContext::new(EnvVars::from_pairs([("N", "2")]).unwrap());

    setter.tear_down(Some(&ctx_a), &mut NullListener);
    setter.tear_down(Some(&ctx_b), &mut NullListener);

    assert_eq!(setter.sink().current(ctx_a.build_id), Some("#1"));
    assert_eq!(setter.sink().current(ctx_b.build_id), Some("#2"));
}
