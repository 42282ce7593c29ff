use clap::Args;
use serde_json::json;

use crate::cli::{utils::output_result, OutputFormat};
use crate::middleware::{GuardDecision, RouteGuard, RouteTable};

#[derive(Args)]
pub struct RouteArgs {
    #[arg(help = "Request path, e.g. /dashboard/settings")]
    pub path: String,

    #[arg(long, help = "Treat the request as carrying a session cookie")]
    pub session: bool,
}

pub async fn handle(args: RouteArgs, output_format: OutputFormat) -> anyhow::Result<()> {
    let guard = RouteGuard::new(RouteTable::reference());
    let class = guard.classify(&args.path);
    let decision = guard.decide(&args.path, args.session);

    let class_text = match class {
        Some(class) => format!("{:?}", class).to_lowercase(),
        None => "excluded".to_string(),
    };
    let decision_text = match decision {
        GuardDecision::Continue => "continue".to_string(),
        GuardDecision::Redirect(location) => format!("redirect -> {}", location),
    };

    output_result(
        output_format,
        &json!({
            "path": args.path,
            "session": args.session,
            "class": class,
            "excluded": class.is_none(),
            "decision": decision,
        }),
        &[
            format!("path:     {}", args.path),
            format!("class:    {}", class_text),
            format!("decision: {}", decision_text),
        ],
    )
}
