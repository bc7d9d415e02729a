use super::{print_list, require_loaded, Context, Reported};
use anyhow::Result;
use clap::{Args, Subcommand};
use moderation::{ApprovalOutcome, PendingProfile};
use tabled::Tabled;

#[derive(Subcommand, Debug)]
pub enum PendingCommand {
    /// List vendor profiles awaiting approval
    List(ListArgs),
    /// Approve a pending vendor profile
    Approve(RowArgs),
    /// Reject and delete a pending vendor profile
    Reject(RowArgs),
}

#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Output machine-readable JSON
    #[arg(long, action)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct RowArgs {
    /// Row id (`_id`) as shown by `pending list`
    #[arg(value_name = "ROW_ID")]
    pub id: String,
}

#[derive(Debug, Tabled)]
struct PendingRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "VENDOR ID")]
    vendor_id: String,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "EMAIL")]
    email: String,
    #[tabled(rename = "CONTACT")]
    contact: String,
    #[tabled(rename = "ROLE")]
    role: String,
}

impl From<&PendingProfile> for PendingRow {
    fn from(profile: &PendingProfile) -> Self {
        Self {
            id: profile.id.clone(),
            vendor_id: profile.approval_target().to_string(),
            name: format!("{} {}", profile.first_name, profile.last_name)
                .trim()
                .to_string(),
            email: profile.email.clone(),
            contact: profile.contact(),
            role: profile.role.clone(),
        }
    }
}

pub async fn handle(ctx: &Context, cmd: PendingCommand) -> Result<()> {
    match cmd {
        PendingCommand::List(args) => {
            let screen = ctx.console()?.pending_approvals();
            screen.mount().await;
            print_list(&screen.view(), args.json, |p| PendingRow::from(p))
        }
        PendingCommand::Approve(args) => resolve(ctx, &args.id, ApprovalOutcome::Approve).await,
        PendingCommand::Reject(args) => resolve(ctx, &args.id, ApprovalOutcome::Reject).await,
    }
}

async fn resolve(ctx: &Context, id: &str, outcome: ApprovalOutcome) -> Result<()> {
    let screen = ctx.console()?.pending_approvals();
    screen.mount().await;
    require_loaded(&screen.view())?;

    screen.open_menu(id);
    if let Err(e) = screen.resolve(id, outcome).await {
        return Err(Reported(e.to_string()).into());
    }
    // the decision stands even if the reload that follows it fails
    require_loaded(&screen.view())?;

    let remaining = screen.view().rows().len();
    println!("{} profile(s) awaiting approval.", remaining);
    Ok(())
}
