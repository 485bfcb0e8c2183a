//! JSON records for [`Trade`].
//!
//! A record carries the descriptor's inputs plus a `price` for auditing.
//! Quantities and price are decimal strings in whole coins; the fee is an
//! integer count of smallest units. Decoding never reads `price`.

use super::*;

pub fn encode(trade: &Trade) -> Result<Map<String, Value>> {
  let price = trade.price()?;

  let mut record = Map::new();
  record.insert("buy".into(), trade.buy().into());
  record.insert("fee".into(), trade.fee().to_sat().into());
  record.insert("coins".into(), trade.coins().to_vec().into());
  record.insert(
    "quantities".into(),
    trade
      .quantities()
      .iter()
      .map(|quantity| quantity.to_string_in(Denomination::Bitcoin))
      .collect::<Vec<String>>()
      .into(),
  );
  record.insert(
    "price".into(),
    price.to_string_in(Denomination::Bitcoin).into(),
  );
  record.insert("immediate".into(), trade.immediate().into());

  Ok(record)
}

pub fn decode(record: &Map<String, Value>) -> Result<Trade> {
  decode_fields(record).inspect_err(|err| log::debug!("rejected trade record: {err}"))
}

fn decode_fields(record: &Map<String, Value>) -> Result<Trade> {
  let [amount, total] = pair(record, "quantities")?;
  let quantities = [quantity(amount)?, quantity(total)?];

  let [a, b] = pair(record, "coins")?;

  let buy = boolean(record, "buy")?;
  let fee = fee(record)?;
  let immediate = boolean(record, "immediate")?;

  Ok(Trade::new(buy, [a.into(), b.into()], quantities, fee)?.with_immediate(immediate))
}

fn field<'a>(record: &'a Map<String, Value>, field: &'static str) -> Result<&'a Value> {
  match record.get(field) {
    None | Some(Value::Null) => error::MissingField { field }.fail(),
    Some(value) => Ok(value),
  }
}

fn pair<'a>(record: &'a Map<String, Value>, field: &'static str) -> Result<[&'a str; 2]> {
  const EXPECTED: &str = "an array of two strings";

  let Value::Array(elements) = self::field(record, field)? else {
    return error::WrongType {
      field,
      expected: EXPECTED,
    }
    .fail();
  };

  let [first, second] = elements.as_slice() else {
    return error::ElementCount {
      field,
      len: elements.len(),
    }
    .fail();
  };

  let element = |index: usize, value: &'a Value| match value {
    Value::String(s) => Ok(s.as_str()),
    Value::Null => error::MissingElement { field, index }.fail(),
    _ => error::WrongType {
      field,
      expected: EXPECTED,
    }
    .fail(),
  };

  Ok([element(0, first)?, element(1, second)?])
}

fn quantity(input: &str) -> Result<Amount> {
  Amount::from_str_in(input, Denomination::Bitcoin).context(error::Parse { input })
}

fn boolean(record: &Map<String, Value>, field: &'static str) -> Result<bool> {
  self::field(record, field)?
    .as_bool()
    .context(error::WrongType {
      field,
      expected: "a boolean",
    })
}

fn fee(record: &Map<String, Value>) -> Result<Amount> {
  let value = field(record, "fee")?;

  if let Some(fee) = value.as_u64() {
    return Ok(Amount::from_sat(fee));
  }

  if let Some(fee) = value.as_i64() {
    return error::NegativeFee { fee }.fail();
  }

  error::WrongType {
    field: "fee",
    expected: "an integer",
  }
  .fail()
}

impl Serialize for Trade {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    encode(self)
      .map_err(<S::Error as ser::Error>::custom)?
      .serialize(serializer)
  }
}

impl<'de> Deserialize<'de> for Trade {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    decode(&Map::deserialize(deserializer)?).map_err(<D::Error as de::Error>::custom)
  }
}
