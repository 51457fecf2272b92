// Positional access - indexing, negative positions, slices

use coinfolio::{Portfolio, PortfolioError, TradeSlice};

fn sample() -> Portfolio {
    let mut portfolio = Portfolio::with_starting_amount("bitcoin", 100);
    portfolio.buy(100).unwrap();
    portfolio.sell(50).unwrap();
    portfolio.sell(40).unwrap();
    portfolio.buy(390).unwrap();
    portfolio
}

// ============================================================================
// SINGLE POSITION TESTS
// ============================================================================

#[test]
fn test_trade_at_positive_index() {
    let portfolio = sample();

    assert_eq!(portfolio.trade_at(0).unwrap(), 100);
    assert_eq!(portfolio.trade_at(3).unwrap(), 390);
}

#[test]
fn test_trade_at_negative_index() {
    let portfolio = sample();

    assert_eq!(portfolio.trade_at(-1).unwrap(), 390);
    assert_eq!(portfolio.trade_at(-4).unwrap(), 100);
}

#[test]
fn test_trade_at_past_the_end_fails() {
    let portfolio = sample();

    assert_eq!(
        portfolio.trade_at(4),
        Err(PortfolioError::IndexOutOfRange { position: 4, len: 4 })
    );
}

#[test]
fn test_trade_at_before_the_start_fails() {
    let portfolio = sample();

    assert_eq!(
        portfolio.trade_at(-5),
        Err(PortfolioError::IndexOutOfRange { position: -5, len: 4 })
    );
}

#[test]
fn test_trade_at_on_empty_portfolio_fails() {
    let portfolio = Portfolio::new("bitcoin");

    assert!(matches!(
        portfolio.trade_at(0),
        Err(PortfolioError::IndexOutOfRange { .. })
    ));
    assert!(matches!(
        portfolio.trade_at(isize::MIN),
        Err(PortfolioError::IndexOutOfRange { .. })
    ));
}

#[test]
fn test_get_is_non_failing() {
    let portfolio = sample();

    assert_eq!(portfolio.get(1), Some(-50));
    assert_eq!(portfolio.get(10), None);
}

// ============================================================================
// SLICE TESTS
// ============================================================================

#[test]
fn test_full_slice_copies_log() {
    let portfolio = sample();

    assert_eq!(portfolio.slice(TradeSlice::new()).unwrap(), vec![100, -50, -40, 390]);
}

#[test]
fn test_reversed_slice_matches_reversed_trades() {
    let portfolio = sample();

    assert_eq!(
        portfolio.slice(TradeSlice::reversed()).unwrap(),
        portfolio.reversed_trades()
    );
}

#[test]
fn test_range_slice() {
    let portfolio = sample();

    assert_eq!(portfolio.slice(TradeSlice::range(1, 3)).unwrap(), vec![-50, -40]);
    assert_eq!(portfolio.slice(TradeSlice::range(-2, 100)).unwrap(), vec![-40, 390]);
}

#[test]
fn test_stepped_slice() {
    let portfolio = sample();

    let every_other = portfolio.slice(TradeSlice::new().with_step(2)).unwrap();
    let backwards_from_second_last = portfolio
        .slice(TradeSlice::reversed().with_start(-2))
        .unwrap();

    assert_eq!(every_other, vec![100, -40]);
    assert_eq!(backwards_from_second_last, vec![-40, -50, 100]);
}

#[test]
fn test_extreme_steps_select_a_single_trade() {
    let portfolio = sample();

    let forward = portfolio
        .slice(TradeSlice::new().with_start(1).with_step(isize::MAX))
        .unwrap();
    let backward = portfolio
        .slice(TradeSlice::reversed().with_step(isize::MIN))
        .unwrap();

    assert_eq!(forward, vec![-50]);
    assert_eq!(backward, vec![390]);
}

#[test]
fn test_empty_range_slice() {
    let portfolio = sample();

    assert!(portfolio.slice(TradeSlice::range(3, 1)).unwrap().is_empty());
}

#[test]
fn test_zero_step_slice_fails() {
    let portfolio = sample();

    assert_eq!(
        portfolio.slice(TradeSlice::new().with_step(0)),
        Err(PortfolioError::InvalidSliceStep)
    );
}
