//! Read-only listings: end users and property listings.

use super::{format_timestamp, print_list, Context};
use anyhow::Result;
use clap::{Args, Subcommand};
use moderation::{PropertyListing, UserProfile};
use tabled::Tabled;

#[derive(Subcommand, Debug)]
pub enum DirectoryCommand {
    /// List all entries
    List(ListArgs),
}

#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Output machine-readable JSON
    #[arg(long, action)]
    pub json: bool,
}

#[derive(Debug, Tabled)]
struct UserRow {
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
    #[tabled(rename = "JOINED")]
    joined: String,
}

impl From<&UserProfile> for UserRow {
    fn from(user: &UserProfile) -> Self {
        let contact = match &user.country_code {
            Some(code) => format!("{} {}", code, user.contact_number),
            None => user.contact_number.clone(),
        };
        Self {
            id: user.id.clone(),
            name: user.display_name(),
            email: user.email.clone(),
            contact,
            role: user.role.clone(),
            joined: format_timestamp(&user.created_at),
        }
    }
}

#[derive(Debug, Tabled)]
struct PropertyRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "TITLE")]
    title: String,
    #[tabled(rename = "CITY")]
    city: String,
    #[tabled(rename = "PRICE")]
    price: String,
    #[tabled(rename = "STATUS")]
    status: String,
    #[tabled(rename = "IMAGES")]
    images: usize,
    #[tabled(rename = "VENDOR")]
    vendor: String,
}

impl From<&PropertyListing> for PropertyRow {
    fn from(listing: &PropertyListing) -> Self {
        Self {
            id: listing.id.clone(),
            title: listing.title.clone(),
            city: listing.city.clone(),
            price: format!("{:.2}", listing.price),
            status: listing.status.clone(),
            images: listing.images.len(),
            vendor: listing
                .vendor_details
                .as_ref()
                .map(|v| v.email.clone())
                .unwrap_or_default(),
        }
    }
}

pub async fn users(ctx: &Context, cmd: DirectoryCommand) -> Result<()> {
    let DirectoryCommand::List(args) = cmd;
    let screen = ctx.console()?.users();
    screen.mount().await;
    print_list(&screen.view(), args.json, |u| UserRow::from(u))
}

pub async fn properties(ctx: &Context, cmd: DirectoryCommand) -> Result<()> {
    let DirectoryCommand::List(args) = cmd;
    let screen = ctx.console()?.properties();
    screen.mount().await;
    print_list(&screen.view(), args.json, |p| PropertyRow::from(p))
}
