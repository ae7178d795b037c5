//! Tests for derived investment metrics.

#[cfg(test)]
mod tests {
    use crate::fx::{CurrencyConverter, ExchangeRateTable, RateEntry};
    use crate::investments::{
        asset_metrics, portfolio_allocation, portfolio_totals, Asset, AssetType, Portfolio,
    };
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn asset(
        id: &str,
        asset_type: AssetType,
        quantity: Decimal,
        purchase_price: Decimal,
        current_price: Option<Decimal>,
    ) -> Asset {
        Asset {
            id: id.to_string(),
            symbol: id.to_uppercase(),
            name: format!("Asset {}", id),
            asset_type,
            quantity,
            purchase_price,
            purchase_date: NaiveDate::from_ymd_opt(2023, 1, 15).unwrap(),
            current_price,
            currency: "USD".to_string(),
            notes: None,
        }
    }

    fn portfolio(id: &str, assets: Vec<Asset>) -> Portfolio {
        Portfolio {
            id: id.to_string(),
            name: format!("Portfolio {}", id),
            description: None,
            assets,
        }
    }

    fn usd_converter() -> CurrencyConverter {
        CurrencyConverter::new(&ExchangeRateTable::new("USD", Vec::new())).unwrap()
    }

    #[test]
    fn test_priced_asset_full_metrics() {
        let metrics = asset_metrics(&asset(
            "aapl",
            AssetType::Stock,
            dec!(10),
            dec!(150.00),
            Some(dec!(175.00)),
        ));

        assert_eq!(metrics.total_cost, dec!(1500.00));
        assert_eq!(metrics.current_value, Some(dec!(1750.00)));
        assert_eq!(metrics.gain_loss, Some(dec!(250.00)));
        assert_eq!(metrics.gain_loss_percent.unwrap().round_dp(2), dec!(16.67));
    }

    #[test]
    fn test_unpriced_asset_has_cost_and_nothing_else() {
        let metrics = asset_metrics(&asset(
            "vine",
            AssetType::Other,
            dec!(3),
            dec!(40.50),
            None,
        ));

        assert_eq!(metrics.total_cost, dec!(121.50));
        assert_eq!(metrics.current_value, None);
        assert_eq!(metrics.gain_loss, None);
        assert_eq!(metrics.gain_loss_percent, None);
    }

    #[test]
    fn test_zero_cost_basis_never_divides() {
        let metrics = asset_metrics(&asset(
            "drop",
            AssetType::Crypto,
            dec!(0),
            dec!(100),
            Some(dec!(120)),
        ));

        assert_eq!(metrics.total_cost, Decimal::ZERO);
        assert_eq!(metrics.current_value, Some(Decimal::ZERO));
        assert_eq!(metrics.gain_loss, Some(Decimal::ZERO));
        assert_eq!(metrics.gain_loss_percent, None);
    }

    #[test]
    fn test_loss_is_negative() {
        let metrics = asset_metrics(&asset(
            "meme",
            AssetType::Stock,
            dec!(4),
            dec!(50),
            Some(dec!(30)),
        ));

        assert_eq!(metrics.gain_loss, Some(dec!(-80)));
        assert_eq!(metrics.gain_loss_percent, Some(dec!(-40)));
    }

    #[test]
    fn test_portfolio_totals_exclude_unpriced_value_but_count_cost() {
        let p = portfolio(
            "p1",
            vec![
                asset("a", AssetType::Stock, dec!(10), dec!(100), Some(dec!(110))),
                asset("b", AssetType::Fund, dec!(5), dec!(200), None),
            ],
        );

        let totals = portfolio_totals(&p);

        // Cost counts both assets; value counts only the priced one.
        assert_eq!(totals.total_cost, dec!(2000));
        assert_eq!(totals.current_value, Some(dec!(1100)));
        assert_eq!(totals.gain_loss, Some(dec!(-900)));
        assert_eq!(totals.gain_loss_percent, Some(dec!(-45)));
    }

    #[test]
    fn test_portfolio_with_no_priced_asset_has_no_value_side() {
        let p = portfolio(
            "p1",
            vec![
                asset("a", AssetType::Stock, dec!(1), dec!(100), None),
                asset("b", AssetType::Bond, dec!(2), dec!(50), None),
            ],
        );

        let totals = portfolio_totals(&p);

        assert_eq!(totals.total_cost, dec!(200));
        assert_eq!(totals.current_value, None);
        assert_eq!(totals.gain_loss, None);
        assert_eq!(totals.gain_loss_percent, None);
    }

    #[test]
    fn test_empty_portfolio() {
        let totals = portfolio_totals(&portfolio("p1", Vec::new()));
        assert_eq!(totals.total_cost, Decimal::ZERO);
        assert_eq!(totals.current_value, None);
        assert_eq!(totals.gain_loss, None);
        assert_eq!(totals.gain_loss_percent, None);
    }

    #[test]
    fn test_allocation_groups_by_type_and_sorts_descending() {
        let portfolios = vec![
            portfolio(
                "p1",
                vec![
                    asset("a", AssetType::Stock, dec!(10), dec!(100), Some(dec!(100))),
                    asset("b", AssetType::Crypto, dec!(1), dec!(300), Some(dec!(400))),
                ],
            ),
            portfolio(
                "p2",
                vec![asset("c", AssetType::Stock, dec!(5), dec!(100), Some(dec!(200)))],
            ),
        ];
        let converter = usd_converter();

        let slices = portfolio_allocation(&portfolios, &converter, "USD").unwrap();

        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].asset_type, AssetType::Stock);
        assert_eq!(slices[0].total_value, dec!(2000));
        assert_eq!(slices[0].percentage, dec!(83.333333));
        assert_eq!(slices[1].asset_type, AssetType::Crypto);
        assert_eq!(slices[1].total_value, dec!(400));
        assert_eq!(slices[1].percentage, dec!(16.666667));
    }

    #[test]
    fn test_allocation_values_unpriced_assets_at_cost() {
        let portfolios = vec![portfolio(
            "p1",
            vec![asset("a", AssetType::Fii, dec!(10), dec!(25), None)],
        )];
        let converter = usd_converter();

        let slices = portfolio_allocation(&portfolios, &converter, "USD").unwrap();

        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].total_value, dec!(250));
        assert_eq!(slices[0].percentage, dec!(100));
    }

    #[test]
    fn test_allocation_with_zero_total_has_zero_shares() {
        let portfolios = vec![portfolio(
            "p1",
            vec![asset("a", AssetType::Stock, dec!(0), dec!(0), None)],
        )];
        let converter = usd_converter();

        let slices = portfolio_allocation(&portfolios, &converter, "USD").unwrap();

        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].percentage, Decimal::ZERO);
    }
}
