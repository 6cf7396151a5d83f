//! Section checkers.
//!
//! Each checker evaluates one part of a [`RecipeLayout`] against a grid and
//! returns issues in document order. Checkers are independent; [`check_all`]
//! concatenates them header first, then ingredients, then method.

mod header;
mod ingredients;
mod method;

pub use header::check_header;
pub use ingredients::check_ingredients;
pub use method::check_method;

use pantry_core::entities::Issue;

use crate::layout::RecipeLayout;
use crate::locator::FieldLocator;

/// Run every section checker in order.
#[must_use]
pub fn check_all(layout: &RecipeLayout, locator: &FieldLocator<'_>) -> Vec<Issue> {
    let mut issues = check_header(&layout.header, locator);
    issues.extend(check_ingredients(&layout.ingredients, locator));
    issues.extend(check_method(&layout.method, locator));
    issues
}
