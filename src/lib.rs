//! Trade descriptors for cross-chain atomic swaps.

#![deny(
  clippy::cast_lossless,
  clippy::cast_possible_truncation,
  clippy::cast_possible_wrap,
  clippy::cast_sign_loss
)]

use {
  bitcoin::{amount::ParseAmountError, Denomination},
  serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer},
  serde_json::{Map, Value},
  snafu::{ensure, OptionExt, ResultExt, Snafu},
  std::{
    fs::File,
    io,
    path::{Path, PathBuf},
  },
};

pub use {
  self::{
    codec::{decode, encode},
    config::Config,
    error::{Error, ErrorKind},
    trade::{Leg, Trade},
  },
  bitcoin::Amount,
};

pub mod codec;
mod config;
pub mod error;
pub mod fixed_point;
mod trade;

type Result<T = (), E = Error> = std::result::Result<T, E>;

/// Default exchange fee rate.
pub const FEE: Amount = Amount::ZERO;

/// Smallest units in one whole coin.
pub const UNIT: u64 = 100_000_000;

/// Smallest units per fee block, ten microcoins.
pub const FEE_BLOCK: u64 = 1000;
