//! Menu and user-menu transforms.
//!
//! # Invariants
//! - `menu_item` order matches input order at every nesting level.
//! - Optional properties (`href`, `active`, `icon`) are set only when present.
//! - A submenu `menu` child is nested only for items with children.
//! - No user means no `user_menu` atom; no user-menu items means no nested `menu`.

use crate::model::atom::{Atom, ATOM_MENU, ATOM_MENU_ITEM, ATOM_USER_INFO, ATOM_USER_MENU};
use crate::model::dashboard::{MenuItem, User};
use crate::transform::TransformError;

/// Maximum submenu nesting accepted from a model.
pub const MAX_MENU_DEPTH: usize = 16;

/// `variant` value of a nested submenu.
pub const MENU_VARIANT_SUBMENU: &str = "submenu";
/// `variant` value of the user dropdown menu.
pub const MENU_VARIANT_USER: &str = "user";

/// Builds a `menu` atom with one `menu_item` per input item.
///
/// # Errors
/// - `InvalidMenuItem` when an item title is blank; `path` is the dotted index
///   path from this menu (`"1.0"` = first child of the second item).
/// - `MenuTooDeep` when submenus nest deeper than [`MAX_MENU_DEPTH`].
pub fn transform_menu(items: &[MenuItem]) -> Result<Atom, TransformError> {
    transform_menu_at(items, "", 0)
}

fn transform_menu_at(
    items: &[MenuItem],
    parent_path: &str,
    depth: usize,
) -> Result<Atom, TransformError> {
    if depth >= MAX_MENU_DEPTH {
        return Err(TransformError::MenuTooDeep {
            max_depth: MAX_MENU_DEPTH,
        });
    }

    let mut menu = Atom::new(ATOM_MENU);
    for (index, item) in items.iter().enumerate() {
        let path = if parent_path.is_empty() {
            index.to_string()
        } else {
            format!("{parent_path}.{index}")
        };
        menu.add_child(transform_menu_item(item, &path, depth)?);
    }
    Ok(menu)
}

fn transform_menu_item(item: &MenuItem, path: &str, depth: usize) -> Result<Atom, TransformError> {
    let title = item.title.trim();
    if title.is_empty() {
        return Err(TransformError::InvalidMenuItem {
            path: path.to_string(),
            reason: "title must not be blank",
        });
    }

    let mut atom = Atom::new(ATOM_MENU_ITEM)
        .with_property("text", title)
        .with_optional_property("href", item.url.trim())
        .with_optional_property("icon", item.icon.trim());
    if item.active {
        atom.set("active", "true");
    }

    if !item.children.is_empty() {
        let submenu = transform_menu_at(&item.children, path, depth + 1)?
            .with_property("variant", MENU_VARIANT_SUBMENU);
        atom.add_child(submenu);
    }
    Ok(atom)
}

/// Builds the `user_menu` atom for a signed-in user.
///
/// Returns `Ok(None)` when there is no user: the header then simply has no
/// user section.
///
/// # Errors
/// - `InvalidUser` when the user display name is blank.
/// - Menu errors from the user dropdown items.
pub fn transform_user_menu(
    user: Option<&User>,
    items: &[MenuItem],
) -> Result<Option<Atom>, TransformError> {
    let Some(user) = user else {
        return Ok(None);
    };

    let name = user.name.trim();
    if name.is_empty() {
        return Err(TransformError::InvalidUser("display name must not be blank"));
    }

    let info = Atom::new(ATOM_USER_INFO)
        .with_property("name", name)
        .with_optional_property("email", user.email.trim())
        .with_optional_property("avatar", user.avatar_url.trim());

    let mut user_menu = Atom::new(ATOM_USER_MENU).with_child(info);
    if !items.is_empty() {
        user_menu.add_child(transform_menu(items)?.with_property("variant", MENU_VARIANT_USER));
    }
    Ok(Some(user_menu))
}
