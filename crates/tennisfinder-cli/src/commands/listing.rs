// Rust guideline compliant 2026-10-16

//! Implementation of the `tennisfinder listing` commands.
//!
//! Mutations run as the `--as` caller. Owner, status and creation time are
//! never taken from the command line.

use crate::OutputFormatter;
use anyhow::Result;
use clap::Args;
use tennisfinder_app::{AppError, DataContext, IdentityProvider};
use tennisfinder_core::{Listing, ListingInput, ListingPatch, RecordId};

/// Fields for `listing create`.
#[derive(Debug, Clone, Args)]
pub struct CreateArgs {
    /// Listing title
    #[arg(long)]
    pub title: String,

    /// Free-text description
    #[arg(long)]
    pub description: String,

    /// Equipment category (e.g. racket, shoes)
    #[arg(long)]
    pub category: String,

    /// Item condition (e.g. new, used)
    #[arg(long)]
    pub condition: String,

    /// Brand name
    #[arg(long)]
    pub brand: String,

    /// Model name
    #[arg(long)]
    pub model: String,

    /// Known flaws
    #[arg(long)]
    pub flaw: String,

    /// Age of the item in months
    #[arg(long)]
    pub age_months: u32,

    /// Price paid when new
    #[arg(long)]
    pub original_price: f64,

    /// Asking price
    #[arg(long)]
    pub user_price: f64,

    /// Image reference (can be specified multiple times)
    #[arg(long = "image")]
    pub images: Vec<String>,
}

impl From<CreateArgs> for ListingInput {
    fn from(args: CreateArgs) -> Self {
        Self {
            title: args.title,
            description: args.description,
            category: args.category,
            condition: args.condition,
            brand: args.brand,
            model: args.model,
            flaw: args.flaw,
            age_months: args.age_months,
            original_price: args.original_price,
            user_price: args.user_price,
            images: args.images,
        }
    }
}

/// Optional fields for `listing update`.
#[derive(Debug, Clone, Default, Args)]
pub struct UpdateArgs {
    /// New title
    #[arg(long)]
    pub title: Option<String>,

    /// New description
    #[arg(long)]
    pub description: Option<String>,

    /// New category
    #[arg(long)]
    pub category: Option<String>,

    /// New condition
    #[arg(long)]
    pub condition: Option<String>,

    /// New brand
    #[arg(long)]
    pub brand: Option<String>,

    /// New model
    #[arg(long)]
    pub model: Option<String>,

    /// New flaw description
    #[arg(long)]
    pub flaw: Option<String>,

    /// New age in months
    #[arg(long)]
    pub age_months: Option<u32>,

    /// New original price
    #[arg(long)]
    pub original_price: Option<f64>,

    /// New asking price
    #[arg(long)]
    pub user_price: Option<f64>,

    /// Predicted sale price from the valuation service
    #[arg(long)]
    pub predicted_sold_price: Option<f64>,

    /// Label from the valuation service
    #[arg(long)]
    pub ai_label: Option<String>,

    /// Replace images with these references (can be specified multiple times)
    #[arg(long = "image", conflicts_with = "clear_images")]
    pub images: Vec<String>,

    /// Remove all images
    #[arg(long)]
    pub clear_images: bool,
}

impl From<UpdateArgs> for ListingPatch {
    fn from(args: UpdateArgs) -> Self {
        let images = if args.clear_images {
            Some(Vec::new())
        } else if args.images.is_empty() {
            None
        } else {
            Some(args.images)
        };

        Self {
            title: args.title,
            description: args.description,
            category: args.category,
            condition: args.condition,
            brand: args.brand,
            model: args.model,
            flaw: args.flaw,
            age_months: args.age_months,
            original_price: args.original_price,
            user_price: args.user_price,
            predicted_sold_price: args.predicted_sold_price,
            ai_label: args.ai_label,
            images,
        }
    }
}

/// Which listings `listing list` shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListScope {
    /// Available listings from every owner.
    Available,
    /// All of the caller's listings.
    Mine,
    /// Every listing; admin only by default.
    All,
}

impl ListScope {
    /// Picks the scope from the `--mine` and `--all` flags.
    #[must_use]
    pub fn from_flags(mine: bool, all: bool) -> Self {
        match (mine, all) {
            (true, _) => ListScope::Mine,
            (false, true) => ListScope::All,
            (false, false) => ListScope::Available,
        }
    }
}

/// Creates a listing owned by the caller and prints it.
///
/// # Errors
///
/// Returns `Unauthenticated` without a caller, `InvalidInput` for a
/// negative or non-finite price, or a store error.
pub fn create(
    ctx: &DataContext,
    identity: &dyn IdentityProvider,
    args: CreateArgs,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let id = ctx.listings().create(identity, &ListingInput::from(args))?;
    let listing = load(ctx, &id)?;
    println!("{}", formatter.format_listing(&listing));
    Ok(())
}

/// Applies a partial update and prints the updated listing.
///
/// # Errors
///
/// Returns `Unauthenticated`, `NotFound`, `Forbidden` or `InvalidInput`,
/// in that order of precedence.
pub fn update(
    ctx: &DataContext,
    identity: &dyn IdentityProvider,
    id: String,
    args: UpdateArgs,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let id = RecordId::new(id);
    ctx.listings().update(identity, &id, &ListingPatch::from(args))?;
    let listing = load(ctx, &id)?;
    println!("{}", formatter.format_listing(&listing));
    Ok(())
}

/// Permanently deletes a listing the caller owns.
///
/// # Errors
///
/// Returns `Unauthenticated`, `NotFound` or `Forbidden`, in that order.
pub fn delete(
    ctx: &DataContext,
    identity: &dyn IdentityProvider,
    id: String,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let id = RecordId::new(id);
    ctx.listings().delete(identity, &id)?;
    println!("{}", formatter.format_ack("deleted", "listing", &id));
    Ok(())
}

/// Flips a listing between Available and Sold and prints the result.
///
/// # Errors
///
/// Returns `Unauthenticated`, `NotFound` or `Forbidden`, in that order.
pub fn toggle(
    ctx: &DataContext,
    identity: &dyn IdentityProvider,
    id: String,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let id = RecordId::new(id);
    ctx.listings().toggle_status(identity, &id)?;
    let listing = load(ctx, &id)?;
    println!("{}", formatter.format_listing(&listing));
    Ok(())
}

/// Shows a single listing. No caller is needed.
///
/// # Errors
///
/// Returns `NotFound` if no listing has the id.
pub fn show(ctx: &DataContext, id: String, formatter: &dyn OutputFormatter) -> Result<()> {
    let listing = load(ctx, &RecordId::new(id))?;
    println!("{}", formatter.format_listing(&listing));
    Ok(())
}

/// Lists listings for the given scope, newest first.
///
/// # Errors
///
/// Returns `Unauthenticated` for `Mine` or `All` without a caller, and
/// `Forbidden` for `All` when the caller is not an admin.
pub fn list(
    ctx: &DataContext,
    identity: &dyn IdentityProvider,
    scope: ListScope,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let queries = ctx.queries();
    let listings = match scope {
        ListScope::Available => queries.list_available()?,
        ListScope::Mine => queries.list_mine(identity)?,
        ListScope::All => queries.list_all(identity)?,
    };
    println!("{}", formatter.format_listings(&listings));
    Ok(())
}

fn load(ctx: &DataContext, id: &RecordId) -> Result<Listing> {
    let listing = ctx.queries().get_by_id(id)?.ok_or_else(|| AppError::NotFound {
        kind: "Listing",
        id: id.to_string(),
    })?;
    Ok(listing)
}
