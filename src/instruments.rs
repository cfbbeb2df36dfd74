use crate::types::Stock;

/// NSE instruments offered by the dashboard picker. The backend's
/// `/api/stocks` returns the same list; this copy keeps the form usable
/// before that call resolves.
pub fn default_stock_options() -> Vec<Stock> {
    [
        ("RELIANCE-EQ", "Reliance Industries"),
        ("TCS-EQ", "Tata Consultancy Services"),
        ("INFY-EQ", "Infosys"),
        ("HDFCBANK-EQ", "HDFC Bank"),
        ("ICICIBANK-EQ", "ICICI Bank"),
        ("SBIN-EQ", "State Bank of India"),
        ("TATAMOTORS-EQ", "Tata Motors"),
        ("WIPRO-EQ", "Wipro"),
        ("ITC-EQ", "ITC"),
        ("BHARTIARTL-EQ", "Bharti Airtel"),
    ]
    .into_iter()
    .map(|(symbol, name)| Stock {
        symbol: symbol.to_string(),
        name: name.to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_are_exchange_qualified() {
        let options = default_stock_options();
        assert_eq!(options.len(), 10);
        assert!(options.iter().all(|s| s.symbol.ends_with("-EQ")));
    }
}
