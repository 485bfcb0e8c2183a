use super::*;

#[derive(Deserialize, Serialize, Debug, PartialEq, Copy, Clone)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
  /// Exchange fee rate, in smallest units per `FEE_BLOCK` smallest units.
  #[serde(with = "bitcoin::amount::serde::as_sat")]
  pub fee: Amount,
}

impl Default for Config {
  fn default() -> Self {
    Self { fee: FEE }
  }
}

impl Config {
  pub fn load(path: &Path) -> Result<Self> {
    let file = File::open(path).context(error::Io { path })?;

    let config = serde_yaml::from_reader(file).context(error::Yaml { path })?;

    log::info!("loaded config from `{}`", path.display());

    Ok(config)
  }

  /// Builds a trade charging the configured fee.
  pub fn trade(&self, buy: bool, coins: [String; 2], quantities: [Amount; 2]) -> Result<Trade> {
    Trade::new(buy, coins, quantities, self.fee)
  }
}
