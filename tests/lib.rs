use {
  coinswap::{decode, encode, Amount, Config, ErrorKind, Leg, Trade, FEE_BLOCK, UNIT},
  pretty_assertions::assert_eq as pretty_assert_eq,
  serde::{Deserialize, Serialize},
  serde_json::{json, Map, Value},
};


fn trade(buy: bool, coins: [&str; 2], quantities: [u64; 2], fee: u64) -> Trade {
  Trade::new(
    buy,
    coins.map(String::from),
    quantities.map(Amount::from_sat),
    Amount::from_sat(fee),
  )
  .unwrap()
}

fn object(value: Value) -> Map<String, Value> {
  match value {
    Value::Object(map) => map,
    _ => panic!("not an object: {value}"),
  }
}
