// SPDX-License-Identifier: MPL-2.0
//! `toast_shelf` is a small toast notification system built with the Iced GUI
//! framework.
//!
//! The core is toolkit-free: a [`notifications::Store`] of toasts that
//! notifies subscribers on change, a [`keys::KeyTrigger`] that fires on
//! selected keys of a [`keys::KeyEvents`] stream, and a shelf projection that
//! turns a snapshot into render entries with bound dismiss actions. The
//! [`app`] and [`ui`] modules wire that core into an Iced window.

pub mod app;
pub mod error;
pub mod keys;
pub mod notifications;
pub mod observer;
pub mod ui;
