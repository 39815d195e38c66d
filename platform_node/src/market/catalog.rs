//! Static token catalog.
//!
//! The baseline figures for the tokens the dashboard tracks. Live
//! quotes jitter around these numbers; when upstream feeds are enabled
//! and reachable, real figures replace them.

#[derive(Debug, Clone, Copy)]
pub struct TokenInfo {
    pub symbol: &'static str,
    pub address: &'static str,
    pub price: f64,
    pub change_24h: f64,
    pub volume_24h: f64,
    pub market_cap: f64,
    pub liquidity: f64,
    pub is_new: bool,
}

const fn token(
    symbol: &'static str,
    address: &'static str,
    price: f64,
    change_24h: f64,
    volume_24h: f64,
    market_cap: f64,
    liquidity: f64,
    is_new: bool,
) -> TokenInfo {
    TokenInfo {
        symbol,
        address,
        price,
        change_24h,
        volume_24h,
        market_cap,
        liquidity,
        is_new,
    }
}

/// Tracked tokens with their baseline market figures.
pub const TRACKED_TOKENS: &[TokenInfo] = &[
    token("BONK", "DezXAZ8z7PnrnRJjz3wXBoRgixCa6xjnB7YaB1pPB263", 0.000018, 2.5, 15_000_000.0, 1_200_000_000.0, 850_000.0, false),
    token("WIF", "EKpQGSJtjMFqKZ9KQanSqYXRcF8fBopzLHYxdM65zcjm", 1.85, -1.2, 45_000_000.0, 1_850_000_000.0, 2_100_000.0, false),
    token("PNUT", "CzLSujWBLFsSjncfkh59rUFqvafWcY5tzedWJSuypump", 0.45, 5.7, 8_500_000.0, 450_000_000.0, 650_000.0, true),
    token("JTO", "27G8MtK7VtTcCHkpASjSDdkWWYfoqT6ggEuKidVJidD4", 2.34, -0.8, 12_000_000.0, 2_340_000_000.0, 1_200_000.0, false),
    token("JUP", "jtojtomepa8beP8AuQc6eXt5FriJwfFMwQx2v2f9mCL", 0.68, 1.9, 25_000_000.0, 680_000_000.0, 1_800_000.0, false),
    token("WEN", "WENWENvqqNya429ubCdR81ZmD69brwQaaBYY6p3LCpk", 0.000089, -2.1, 3_200_000.0, 89_000_000.0, 420_000.0, true),
    token("RENDER", "rndrizKT3MK1iimdxRdWabcF7Zg7AR5T4nud4EkHBof", 5.67, 3.4, 18_000_000.0, 5_670_000_000.0, 2_500_000.0, false),
    token("MANEKI", "25hAyBQfQkpoxsVQKLhBMNSKjD9xZWXBx3TYH5E7rCd6", 0.0085, -5.2, 1_800_000.0, 85_000_000.0, 280_000.0, true),
    token("bSOL", "bSo13r4TkiE4KumL71LsHTPpL2euBYLFx6h9HP3piy1", 142.50, -0.5, 850_000.0, 142_500_000.0, 950_000.0, false),
    token("SELFIE", "9WPTUkh85pEiWYjqJcA7CLJz7LLV6CEJF3SyyhKe8LuC", 0.000034, -5.6, 450_000.0, 34_000_000.0, 180_000.0, true),
    token("LDO", "HZRCwxP2VXMLReUpqzWoAkqp2ZUYxqg9BGWJm1rmPBan", 1.23, -7.6, 5_600_000.0, 1_230_000_000.0, 1_100_000.0, false),
    token("FRKT", "ErGB9xa24SdqwzX8AHBnZKwjqGYMhHkfTvKKqCbPB9qn", 0.78, -1.1, 980_000.0, 78_000_000.0, 320_000.0, false),
    token("POPCAT", "7GCihgDB8fe6KNjn2MYtkzZcRjQy3t9GHdC8uHYmW2hr", 0.92, 4.1, 6_400_000.0, 92_000_000.0, 510_000.0, false),
    token("MEW", "MEW1gQWJ3nEXg2qgERiKu7FAFj79PHvQVREQUzScPP5", 0.0041, 1.3, 4_700_000.0, 410_000_000.0, 380_000.0, false),
    token("GOAT", "CzLSujWBLFsSjncfkh59rUFqvafWcY5tzedWJSuypum2", 0.31, -3.7, 2_900_000.0, 310_000_000.0, 240_000.0, true),
];

pub fn by_symbol(symbol: &str) -> Option<&'static TokenInfo> {
    TRACKED_TOKENS
        .iter()
        .find(|token| token.symbol.eq_ignore_ascii_case(symbol))
}
