use super::*;

/// One side of the swap. `A` is the chain whose coin moves A→B, quoted in
/// `quantities[0]`; `B` is the chain whose coin moves B→A, quoted in
/// `quantities[1]`.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Leg {
  A,
  B,
}

impl Leg {
  fn index(self) -> usize {
    match self {
      Self::A => 0,
      Self::B => 1,
    }
  }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Trade {
  buy: bool,
  coins: [String; 2],
  quantities: [Amount; 2],
  fee: Amount,
  immediate: bool,
}

impl Trade {
  pub fn new(
    buy: bool,
    coins: [String; 2],
    quantities: [Amount; 2],
    fee: Amount,
  ) -> Result<Self> {
    for (index, coin) in coins.iter().enumerate() {
      ensure!(!coin.is_empty(), error::EmptyCoin { index });
    }

    ensure!(
      coins[0] != coins[1],
      error::DuplicateCoin {
        coin: coins[0].as_str(),
      }
    );

    for (index, quantity) in quantities.iter().enumerate() {
      ensure!(
        *quantity > Amount::ZERO,
        error::NonPositiveQuantity { index }
      );
    }

    Ok(Self {
      buy,
      coins,
      quantities,
      fee,
      immediate: false,
    })
  }

  /// If `immediate` is set, the trade may only fill already open orders and
  /// never rests on the book.
  pub fn with_immediate(self, immediate: bool) -> Self {
    Self { immediate, ..self }
  }

  /// True when trading coin B for coin A, false when trading A for B.
  pub fn buy(&self) -> bool {
    self.buy
  }

  pub fn coins(&self) -> &[String; 2] {
    &self.coins
  }

  pub fn coin(&self, leg: Leg) -> &str {
    &self.coins[leg.index()]
  }

  pub fn quantities(&self) -> [Amount; 2] {
    self.quantities
  }

  pub fn quantity(&self, leg: Leg) -> Amount {
    self.quantities[leg.index()]
  }

  /// Fee rate, in smallest units per `FEE_BLOCK` smallest units traded.
  pub fn fee(&self) -> Amount {
    self.fee
  }

  pub fn immediate(&self) -> bool {
    self.immediate
  }

  /// The quantity of coin A this trade buys or sells.
  pub fn amount(&self) -> Amount {
    self.quantity(Leg::A)
  }

  /// The quantity of coin B paid or received for `amount`.
  pub fn total(&self) -> Amount {
    self.quantity(Leg::B)
  }

  /// Price of one whole coin A, in smallest units of coin B.
  pub fn price(&self) -> Result<Amount> {
    fixed_point::mul_div(self.total().to_sat(), UNIT, self.amount().to_sat())
      .map(Amount::from_sat)
      .context(error::Overflow { operation: "price" })
      .inspect_err(|_| {
        log::debug!(
          "price of {} {} for {} {} out of range",
          self.amount().to_string_in(Denomination::Bitcoin),
          self.coin(Leg::A),
          self.total().to_string_in(Denomination::Bitcoin),
          self.coin(Leg::B),
        )
      })
  }

  /// The quantity of coin B exchanged for `amount` of coin A at `price`.
  pub fn compute_total(price: Amount, amount: Amount) -> Result<Amount> {
    fixed_point::mul_div(amount.to_sat(), price.to_sat(), UNIT)
      .map(Amount::from_sat)
      .context(error::Overflow { operation: "total" })
  }

  /// Exchange fee owed on the quantity of `leg`. Every started block of
  /// `FEE_BLOCK` smallest units is charged in full.
  pub fn fee_amount(&self, leg: Leg) -> Result<Amount> {
    let blocks = fixed_point::ceil_div(self.quantity(leg).to_sat(), FEE_BLOCK)
      .context(error::Overflow { operation: "fee" })?;

    self
      .fee
      .checked_mul(blocks)
      .context(error::Overflow { operation: "fee" })
  }
}
