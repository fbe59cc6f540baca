use std::path::PathBuf;

use desc_core::{BufferListener, BuildContext, DescriptionSetter, InMemorySink, Node};
use desc_domain::{DescriptionTemplate, EnvVars};
use desc_scm::{FixedExe, GitScm, PathLookup, Scm, ScmFactExtractor};

fn main() {
    // Cargar .env si existe para obtener DESCRIPTION_TEMPLATE
    let _ = dotenvy::dotenv();
    env_logger::init();
    // CLI mínima: `desc-cli set --workspace <DIR> --template <TPL> [--git <EXE>] [--node <NAME>] [--pre-work]`
    let args: Vec<String> = std::env::args().collect();
    if args.len() >= 2 && args[1] == "set" {
        let mut workspace: Option<PathBuf> = None;
        let mut template: Option<String> = None;
        let mut git_exe: Option<PathBuf> = None;
        let mut node_name: Option<String> = None;
        let mut pre_work = false;
        let mut i = 2;
        while i < args.len() {
            match args[i].as_str() {
                "--workspace" => {
                    i += 1;
                    if i < args.len() { workspace = Some(PathBuf::from(&args[i])); }
                }
                "--template" => {
                    i += 1;
                    if i < args.len() { template = Some(args[i].clone()); }
                }
                "--git" => {
                    i += 1;
                    if i < args.len() { git_exe = Some(PathBuf::from(&args[i])); }
                }
                "--node" => {
                    i += 1;
                    if i < args.len() { node_name = Some(args[i].clone()); }
                }
                "--pre-work" => {
                    pre_work = true;
                }
                _ => {}
            }
            i += 1;
        }

        // La plantilla puede venir del flag o de DESCRIPTION_TEMPLATE (.env)
        let template = template.or_else(|| std::env::var("DESCRIPTION_TEMPLATE").ok());
        let (workspace, template) = match (workspace, template) {
            (Some(w), Some(t)) => (w, t),
            _ => {
                eprintln!("[desc set] falta --workspace o --template (o DESCRIPTION_TEMPLATE)");
                std::process::exit(2);
            }
        };

        log::debug!("workspace={} node={:?}", workspace.display(), node_name);

        // Entorno del proceso como snapshot inicial del build.
        let mut env = EnvVars::new();
        for (k, v) in std::env::vars() {
            if k.is_empty() { continue; }
            let _ = env.insert(k, v);
        }

        let git = match git_exe {
            Some(exe) => GitScm::new(Box::new(FixedExe(exe))),
            None => GitScm::new(Box::new(PathLookup::git())),
        };
        let extractor = ScmFactExtractor::new(Scm::Git(git));
        let mut setter = DescriptionSetter::new(DescriptionTemplate::new(template), extractor, InMemorySink::new());
        let mut listener = BufferListener::default();

        let node = Node::new(node_name.unwrap_or_else(|| "local".to_string()));
        let mut ctx = BuildContext::new(env);

        if pre_work {
            let publication = setter.pre_work(Some(&ctx), &mut listener);
            if let Some(text) = publication.description {
                println!("pre-work: {text}");
            }
        }

        ctx = ctx.with_workspace(workspace, node);
        let setup = setter.set_up(&mut ctx, &mut listener);
        if let Some(text) = setup.description.as_deref() {
            println!("post-setup: {text}");
        }
        for (k, v) in setup.contributed.iter() {
            println!("  {k}={v}");
        }

        let teardown = setter.tear_down(Some(&ctx), &mut listener);
        match teardown.description {
            Some(text) => println!("teardown: {text}"),
            None => {
                eprintln!("[desc set] no se publicó descripción");
                std::process::exit(4);
            }
        }

        for line in listener.lines.iter() {
            eprintln!("[desc set] {line}");
        }
        return;
    }

    eprintln!("uso: desc-cli set --workspace <DIR> --template <TPL> [--git <EXE>] [--node <NAME>] [--pre-work]");
    std::process::exit(2);
}
