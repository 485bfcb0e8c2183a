use super::*;

#[derive(Debug, PartialEq, Copy, Clone)]
pub enum ErrorKind {
  Config,
  Overflow,
  Parse,
  Validation,
}

#[derive(Debug, Snafu)]
#[snafu(context(suffix(false)), visibility(pub(crate)))]
pub enum Error {
  #[snafu(display("coin identifiers must be distinct, both are `{coin}`"))]
  DuplicateCoin { coin: String },
  #[snafu(display("field `{field}` must have exactly 2 elements, got {len}"))]
  ElementCount { field: &'static str, len: usize },
  #[snafu(display("coin identifier {index} is empty"))]
  EmptyCoin { index: usize },
  #[snafu(display("I/O error at `{}`", path.display()))]
  Io { path: PathBuf, source: io::Error },
  #[snafu(display("element {index} of `{field}` is missing"))]
  MissingElement { field: &'static str, index: usize },
  #[snafu(display("missing field `{field}`"))]
  MissingField { field: &'static str },
  #[snafu(display("fee must not be negative: {fee}"))]
  NegativeFee { fee: i64 },
  #[snafu(display("quantity {index} must be positive"))]
  NonPositiveQuantity { index: usize },
  #[snafu(display("{operation} out of range"))]
  Overflow { operation: &'static str },
  #[snafu(display("invalid quantity `{input}`"))]
  Parse {
    input: String,
    source: ParseAmountError,
  },
  #[snafu(display("field `{field}` must be {expected}"))]
  WrongType {
    field: &'static str,
    expected: &'static str,
  },
  #[snafu(display("invalid config file `{}`", path.display()))]
  Yaml {
    path: PathBuf,
    source: serde_yaml::Error,
  },
}

impl Error {
  pub fn kind(&self) -> ErrorKind {
    match self {
      Self::Io { .. } | Self::Yaml { .. } => ErrorKind::Config,
      Self::Overflow { .. } => ErrorKind::Overflow,
      Self::Parse { .. } => ErrorKind::Parse,
      Self::DuplicateCoin { .. }
      | Self::ElementCount { .. }
      | Self::EmptyCoin { .. }
      | Self::MissingElement { .. }
      | Self::MissingField { .. }
      | Self::NegativeFee { .. }
      | Self::NonPositiveQuantity { .. }
      | Self::WrongType { .. } => ErrorKind::Validation,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn display() {
    #[track_caller]
    fn case(err: Error, message: &str) {
      assert_eq!(err.to_string(), message);
    }

    case(EmptyCoin { index: 1_usize }.build(), "coin identifier 1 is empty");
    case(
      DuplicateCoin { coin: "BTC" }.build(),
      "coin identifiers must be distinct, both are `BTC`",
    );
    case(
      ElementCount {
        field: "quantities",
        len: 1_usize,
      }
      .build(),
      "field `quantities` must have exactly 2 elements, got 1",
    );
    case(
      WrongType {
        field: "buy",
        expected: "a boolean",
      }
      .build(),
      "field `buy` must be a boolean",
    );
    case(Overflow { operation: "price" }.build(), "price out of range");
  }

  #[test]
  fn kind() {
    assert_eq!(
      NonPositiveQuantity { index: 0_usize }.build().kind(),
      ErrorKind::Validation
    );
    assert_eq!(
      NegativeFee { fee: -1_i64 }.build().kind(),
      ErrorKind::Validation
    );
    assert_eq!(
      Overflow { operation: "total" }.build().kind(),
      ErrorKind::Overflow
    );
    assert_eq!(
      Amount::from_str_in("x", Denomination::Bitcoin)
        .context(Parse { input: "x" })
        .unwrap_err()
        .kind(),
      ErrorKind::Parse
    );
  }
}
