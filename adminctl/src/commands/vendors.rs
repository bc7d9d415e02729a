use super::{colorize_state, format_timestamp, print_list, require_loaded, Context, Reported};
use anyhow::Result;
use clap::{Args, Subcommand};
use moderation::{ActivationState, MenuEntry, VendorProfile, VendorScreen};
use tabled::Tabled;

#[derive(Subcommand, Debug)]
pub enum VendorsCommand {
    /// List approved vendors
    List(ListArgs),
    /// Reactivate a deactivated vendor
    Activate(TargetArgs),
    /// Deactivate an active vendor
    Deactivate(TargetArgs),
    /// Delete a vendor (cannot be undone)
    Delete(TargetArgs),
}

#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Output machine-readable JSON
    #[arg(long, action)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct TargetArgs {
    /// Vendor id (`_id`)
    #[arg(value_name = "VENDOR_ID")]
    pub id: String,
}

#[derive(Debug, Tabled)]
struct VendorRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "EMAIL")]
    email: String,
    #[tabled(rename = "CONTACT")]
    contact: String,
    #[tabled(rename = "ROLE")]
    role: String,
    #[tabled(rename = "STATUS")]
    status: String,
    #[tabled(rename = "CREATED")]
    created: String,
    #[tabled(rename = "ACTIONS")]
    actions: String,
}

impl VendorRow {
    fn new(vendor: &VendorProfile, entries: &[MenuEntry<ActivationState>]) -> Self {
        Self {
            id: vendor.id.clone(),
            name: vendor.display_name(),
            email: vendor.email.clone(),
            contact: vendor.contact(),
            role: vendor.role.clone(),
            status: colorize_state(vendor.activation_state),
            created: format_timestamp(&vendor.created_at),
            actions: entries
                .iter()
                .map(|entry| entry.label)
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

pub async fn handle(ctx: &Context, cmd: VendorsCommand) -> Result<()> {
    match cmd {
        VendorsCommand::List(args) => list(ctx, args).await,
        VendorsCommand::Activate(args) => change(ctx, &args.id, ActivationState::Active).await,
        VendorsCommand::Deactivate(args) => {
            change(ctx, &args.id, ActivationState::Deactivated).await
        }
        VendorsCommand::Delete(args) => change(ctx, &args.id, ActivationState::Deleted).await,
    }
}

async fn list(ctx: &Context, args: ListArgs) -> Result<()> {
    let screen = ctx.console()?.vendors();
    screen.mount().await;

    let view = screen.view();
    print_list(&view, args.json, |vendor| {
        VendorRow::new(vendor, &screen.menu_entries(&vendor.id))
    })
}

async fn change(ctx: &Context, id: &str, target: ActivationState) -> Result<()> {
    let screen: VendorScreen = ctx.console()?.vendors();
    screen.mount().await;
    require_loaded(&screen.view())?;

    screen.open_menu(id);
    match screen.select(id, target).await {
        Ok(_) if target.is_terminal() => {
            println!("Vendor {} deleted.", id);
            Ok(())
        }
        Ok(_) => {
            println!("Vendor {} is now {}.", id, target);
            Ok(())
        }
        // the screen has already alerted the operator
        Err(e) => Err(Reported(e.to_string()).into()),
    }
}
