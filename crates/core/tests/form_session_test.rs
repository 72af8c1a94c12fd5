// End-to-end form session: normalize keystrokes into records, calculate,
// persist through the store port, reload, and get the same results back.

use rust_decimal_macros::dec;

use stockmetrics_core::brokerage::{calculate_profit, TransactionInput};
use stockmetrics_core::classification::Verdict;
use stockmetrics_core::dividends::{calculate_summary, DividendHolding, PaymentFrequency};
use stockmetrics_core::risk::{calculate_risk, normalize_allocations, PortfolioHolding, RiskLevel};
use stockmetrics_core::store::{load_form, save_form, FormKey, FormStoreTrait, MemoryFormStore};
use stockmetrics_core::utils::input_utils::normalize_number_input;
use stockmetrics_core::valuation::{
    calculate_ratios, overall_verdict, validate_metrics, FinancialMetrics, GrowthRateProxy,
    RatioKey,
};

#[test]
fn valuation_form_session() {
    // Field edits arrive as raw text; the normalizer is the only parser.
    let metrics = FinancialMetrics {
        ticker: "ACME".to_string(),
        price: normalize_number_input("30").value(),
        eps: normalize_number_input("2,0").value(),
        total_equity: normalize_number_input(" 500 ").value(),
        total_revenue: normalize_number_input("1000").value(),
        operating_cash_flow: normalize_number_input("120").value(),
        outstanding_shares: normalize_number_input("100").value(),
        net_income: normalize_number_input("100").value(),
        total_assets: normalize_number_input("900").value(),
        total_liabilities: normalize_number_input("400").value(),
        ebitda: normalize_number_input("150").value(),
        growth_rate: None,
    };

    validate_metrics(&metrics).unwrap();
    let ratios = calculate_ratios(&metrics, GrowthRateProxy::default());
    assert_eq!(ratios.get(RatioKey::Pe), Some(dec!(15)));
    assert_eq!(overall_verdict(&ratios), Verdict::Overvalued);

    // The caller persists the record, not the result.
    let store = MemoryFormStore::new();
    save_form(&store, FormKey::VALUATION, &metrics).unwrap();
    let restored: FinancialMetrics = load_form(&store, FormKey::VALUATION).unwrap().unwrap();
    let recalculated = calculate_ratios(&restored, GrowthRateProxy::default());
    assert_eq!(recalculated.get(RatioKey::Pe), ratios.get(RatioKey::Pe));
    assert_eq!(recalculated.len(), ratios.len());
}

#[test]
fn profit_form_session_with_malformed_keystrokes() {
    // A malformed token degrades to zero, which the validator then rejects.
    let bad_tx = TransactionInput {
        quantity: 100,
        buy_price: normalize_number_input("1oo").value(),
        sell_price: normalize_number_input("110").value(),
        intraday: false,
    };
    assert!(calculate_profit(&bad_tx).is_err());

    let tx = TransactionInput {
        quantity: 100,
        buy_price: normalize_number_input("100").value(),
        sell_price: normalize_number_input("110").value(),
        intraday: false,
    };
    let result = calculate_profit(&tx).unwrap();
    assert_eq!(result.net_profit, dec!(764.8));
    assert_eq!(result.roi, dec!(7.648));
}

#[test]
fn portfolio_form_session_add_edit_remove() {
    let mut holdings = vec![
        PortfolioHolding::new("AAA", 100, dec!(0.9)),
        PortfolioHolding::new("BBB", 300, dec!(1.1)),
    ];
    normalize_allocations(&mut holdings);

    // Add a row, then remove it again; allocations re-derive each time.
    holdings.push(PortfolioHolding::new("CCC", 600, dec!(2.0)));
    normalize_allocations(&mut holdings);
    holdings.pop();
    normalize_allocations(&mut holdings);

    let risk = calculate_risk(&holdings).unwrap();
    // 0.9 * 0.25 + 1.1 * 0.75
    assert_eq!(risk.weighted_beta, dec!(1.05));
    assert_eq!(risk.risk_level, RiskLevel::Moderate);
}

#[test]
fn dividend_form_session_clear_resets_the_store() {
    let holdings = vec![DividendHolding {
        ticker: "AAA".to_string(),
        shares: 100,
        price: dec!(50),
        annual_dividend: dec!(2),
        frequency: PaymentFrequency::Quarterly,
    }];
    let summary = calculate_summary(&holdings).unwrap();
    assert_eq!(summary.total_annual_income, dec!(200));

    let store = MemoryFormStore::new();
    save_form(&store, FormKey::DIVIDEND_TRACKER, &holdings).unwrap();

    // "Clear" is a caller concern: reset held state and drop the cache key.
    store.clear(FormKey::DIVIDEND_TRACKER).unwrap();
    let restored: Option<Vec<DividendHolding>> =
        load_form(&store, FormKey::DIVIDEND_TRACKER).unwrap();
    assert!(restored.is_none());
}
