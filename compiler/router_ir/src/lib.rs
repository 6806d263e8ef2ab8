//! Router IR - Data Model for the Router Generator
//!
//! This crate contains the core data structures shared by every stage of
//! router generation:
//! - `Selector` for 4-byte function selectors
//! - `Address` for deployed module addresses (EIP-55 aware)
//! - ABI fragments as found in compiler artifacts
//! - `ModuleDescriptor` and `FunctionSelector` for the selector pipeline
//! - `DispatchNode` for the binary-search dispatch tree
//!
//! # Pipeline
//!
//! ```text
//! ModuleDescriptor[]
//!     │  extract + validate + sort
//!     ▼
//! FunctionSelector[] ──► DispatchNode ──► emitted fragments ──► template
//! ```
//!
//! Every type here is constructed fresh per generation call. Nothing is
//! cached or shared between calls.

mod abi;
mod address;
mod dispatch;
mod hash;
mod module;
mod selector;

pub use abi::{AbiFragment, AbiParam, FragmentKind};
pub use address::{Address, AddressError};
pub use dispatch::DispatchNode;
pub use hash::keccak256;
pub use module::{FunctionSelector, ModuleDescriptor, ModuleId};
pub use selector::Selector;
