pub const MAINNET: &str = "https://xrplcluster.com";
pub const TESTNET: &str = "https://testnet.xrpl-labs.com";
pub const DEVNET: &str = "https://s.devnet.rippletest.net:51234";

pub const WS_MAINNET: &str = "wss://xrplcluster.com";
pub const WS_TESTNET: &str = "wss://testnet.xrpl-labs.com";
pub const WS_DEVNET: &str = "wss://s.devnet.rippletest.net:51233";

pub const XAHAU: &str = "https://xahau.network";
pub const XAHAU_TESTNET: &str = "https://xahau-test.net";

pub const WS_XAHAU: &str = "wss://xahau.network";
pub const WS_XAHAU_TESTNET: &str = "wss://xahau-test.net";
