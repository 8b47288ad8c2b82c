// Rust guideline compliant 2026-10-16

//! Implementation of the `tennisfinder user` commands.

use crate::OutputFormatter;
use anyhow::Result;
use tennisfinder_app::{AppError, DataContext, NewUser};
use tennisfinder_core::{Role, UserId};

/// Registers a new user and prints the resulting profile.
///
/// The profile carries the defaults applied at registration: the configured
/// role when none is given, and the join time.
///
/// # Errors
///
/// Returns an error if:
/// - The role name is unknown
/// - The email is malformed or already registered
/// - The store cannot be written
pub fn register(
    ctx: &DataContext,
    email: String,
    first_name: Option<String>,
    last_name: Option<String>,
    phone: Option<String>,
    role: Option<String>,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let role = role.as_deref().map(Role::parse).transpose().map_err(AppError::from)?;
    let user = NewUser {
        email,
        first_name,
        last_name,
        phone,
        role,
    };

    let profile = ctx.users().register(&user)?;
    println!("{}", formatter.format_user(&profile));
    Ok(())
}

/// Shows a user profile by id, or the caller's own profile without one.
///
/// # Errors
///
/// Returns `Unauthenticated` when neither an id nor a caller is given, and
/// `NotFound` for an unknown id.
pub fn show(
    ctx: &DataContext,
    id: Option<String>,
    caller: Option<&UserId>,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let id = match (id, caller) {
        (Some(id), _) => UserId::new(id),
        (None, Some(caller)) => caller.clone(),
        (None, None) => return Err(AppError::Unauthenticated.into()),
    };

    let profile = ctx.users().get(&id)?.ok_or_else(|| AppError::NotFound {
        kind: "User",
        id: id.to_string(),
    })?;
    println!("{}", formatter.format_user(&profile));
    Ok(())
}

/// Re-applies registration defaults to an existing user.
///
/// Only unset fields are written, so repeated runs change nothing.
///
/// # Errors
///
/// Returns `NotFound` for an unknown id, or a store error.
pub fn ensure_defaults(ctx: &DataContext, id: String, formatter: &dyn OutputFormatter) -> Result<()> {
    let id = UserId::new(id);
    let profile = ctx
        .users()
        .ensure_defaults(&id)?
        .ok_or_else(|| AppError::NotFound {
            kind: "User",
            id: id.to_string(),
        })?;
    println!("{}", formatter.format_user(&profile));
    Ok(())
}
