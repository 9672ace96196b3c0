// SPDX-License-Identifier: MPL-2.0
//! Iced widgets for the playground window and the toast shelf.

pub mod design_tokens;
pub mod playground;
pub mod shelf;
pub mod theming;
