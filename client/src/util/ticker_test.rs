use super::*;

#[test]
fn cancel_stops_ticker() {
    let ticker = Ticker::start(4000, || {});
    assert!(ticker.is_running());
    ticker.cancel();
    assert!(!ticker.is_running());
}

#[test]
fn drop_clears_shared_flag() {
    let ticker = Ticker::start(10, || {});
    let alive = ticker.alive.clone();
    drop(ticker);
    assert!(!alive.load(Ordering::Relaxed));
}
