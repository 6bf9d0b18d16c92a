//! In-memory exchange clients that script responses and record every call
#![allow(dead_code)]

use async_trait::async_trait;
use exchangehub::core::config::ApiInformation;
use exchangehub::core::errors::ClientError;
use exchangehub::exchanges::binance::{
    BinanceAccountInfo, BinanceBalance, BinanceClient, BinanceDepositAddress, BinanceDepth,
    BinanceExchangeInfo, BinanceKline, BinanceMarket, BinanceOrder, BinanceOrderRequest,
    BinancePriceTicker, BinanceTicker24h,
};
use exchangehub::exchanges::bittrex::{
    BittrexBalance, BittrexClient, BittrexDepositAddress, BittrexMarket, BittrexMarketSummary,
    BittrexOrder, BittrexOrderAccepted, BittrexOrderBook, BittrexOrderRequest,
};
use exchangehub::exchanges::coinbase_pro::{
    CoinbaseAccount, CoinbaseOrder, CoinbaseOrderBook, CoinbaseOrderRequest, CoinbaseProClient,
    CoinbaseProduct, CoinbaseProductStats, CoinbaseProductTicker,
};
use exchangehub::exchanges::kucoin::{
    KuCoin24hStats, KuCoinAccount, KuCoinAllTickers, KuCoinCandle, KuCoinClient,
    KuCoinDepositAddress, KuCoinOrder, KuCoinOrderAccepted, KuCoinOrderBook, KuCoinOrderRequest,
    KuCoinSymbol, KuCoinTicker, KuCoinTickerItem,
};
use exchangehub::{ClientFactory, Exchange, ExchangeClient};
use rust_decimal::Decimal;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Ordered log of client calls, `"endpoint arg..."`
#[derive(Default)]
pub struct Recorder {
    calls: Mutex<Vec<String>>,
}

impl Recorder {
    pub fn record(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Calls whose endpoint is `endpoint`
    pub fn count_of(&self, endpoint: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|call| call.split(' ').next() == Some(endpoint))
            .count()
    }

    pub fn reset(&self) {
        self.calls.lock().unwrap().clear();
    }
}

fn failure(what: &str) -> ClientError {
    format!("simulated {} failure", what).into()
}

// ---------------------------------------------------------------------------
// Binance

#[derive(Default)]
pub struct FakeBinance {
    pub recorder: Recorder,
}

impl FakeBinance {
    fn order(symbol: &str, order_id: u64, status: &str) -> BinanceOrder {
        BinanceOrder {
            symbol: symbol.to_string(),
            order_id,
            price: "0.05".into(),
            orig_qty: "2".into(),
            executed_qty: "0".into(),
            status: status.into(),
            side: "BUY".into(),
            order_type: "LIMIT".into(),
            stop_price: None,
            transact_time: None,
            time: Some(1_600_000_000_000),
            update_time: None,
        }
    }
}

#[async_trait]
impl BinanceClient for FakeBinance {
    async fn exchange_info(&self) -> Result<BinanceExchangeInfo, ClientError> {
        self.recorder.record("exchange_info");
        let market = |symbol: &str, base: &str, quote: &str| BinanceMarket {
            symbol: symbol.into(),
            status: "TRADING".into(),
            base_asset: base.into(),
            quote_asset: quote.into(),
        };
        Ok(BinanceExchangeInfo {
            symbols: vec![
                market("ETHBTC", "ETH", "BTC"),
                market("LTCBTC", "LTC", "BTC"),
                market("BNBUSDT", "BNB", "USDT"),
            ],
        })
    }

    async fn account(&self) -> Result<BinanceAccountInfo, ClientError> {
        self.recorder.record("account");
        Ok(BinanceAccountInfo {
            balances: vec![
                BinanceBalance {
                    asset: "BTC".into(),
                    free: "1.5".into(),
                    locked: "0.5".into(),
                },
                BinanceBalance {
                    asset: "ETH".into(),
                    free: "0.00000000".into(),
                    locked: "0.00000000".into(),
                },
            ],
        })
    }

    async fn new_order(&self, request: &BinanceOrderRequest) -> Result<BinanceOrder, ClientError> {
        self.recorder
            .record(format!("new_order {} {}", request.symbol, request.order_type));
        Ok(BinanceOrder {
            symbol: request.symbol.clone(),
            order_id: 42,
            price: request.price.clone().unwrap_or_else(|| "0".into()),
            orig_qty: request.quantity.clone(),
            executed_qty: "0".into(),
            status: "NEW".into(),
            side: request.side.clone(),
            order_type: request.order_type.clone(),
            stop_price: request.stop_price.clone(),
            transact_time: Some(1_600_000_000_000),
            time: None,
            update_time: None,
        })
    }

    async fn cancel_order(&self, symbol: &str, order_id: u64) -> Result<BinanceOrder, ClientError> {
        self.recorder.record(format!("cancel_order {} {}", symbol, order_id));
        Ok(Self::order(symbol, order_id, "CANCELED"))
    }

    async fn query_order(&self, symbol: &str, order_id: u64) -> Result<BinanceOrder, ClientError> {
        self.recorder.record(format!("query_order {} {}", symbol, order_id));
        Ok(Self::order(symbol, order_id, "NEW"))
    }

    async fn all_orders(&self, symbol: &str, limit: u32) -> Result<Vec<BinanceOrder>, ClientError> {
        self.recorder.record(format!("all_orders {} {}", symbol, limit));
        Ok(vec![Self::order(symbol, 1, "FILLED"), Self::order(symbol, 2, "NEW")])
    }

    async fn open_orders(&self, symbol: &str) -> Result<Vec<BinanceOrder>, ClientError> {
        self.recorder.record(format!("open_orders {}", symbol));
        Ok(vec![Self::order(symbol, 2, "NEW")])
    }

    async fn klines(
        &self,
        symbol: &str,
        interval: &str,
        limit: u32,
    ) -> Result<Vec<BinanceKline>, ClientError> {
        self.recorder
            .record(format!("klines {} {} {}", symbol, interval, limit));
        Ok(vec![BinanceKline {
            open_time: 1_600_000_000_000,
            open: "0.030".into(),
            high: "0.034".into(),
            low: "0.029".into(),
            close: "0.033".into(),
            volume: "120".into(),
            close_time: 1_600_000_059_999,
        }])
    }

    async fn ticker_24h(&self, symbol: &str) -> Result<BinanceTicker24h, ClientError> {
        self.recorder.record(format!("ticker_24h {}", symbol));
        Err(failure("ticker_24h"))
    }

    async fn ticker_prices(&self) -> Result<Vec<BinancePriceTicker>, ClientError> {
        self.recorder.record("ticker_prices");
        Ok(vec![
            BinancePriceTicker {
                symbol: "ETHBTC".into(),
                price: "0.0321".into(),
            },
            BinancePriceTicker {
                symbol: "BNBUSDT".into(),
                price: "301.5".into(),
            },
        ])
    }

    async fn depth(&self, symbol: &str, limit: u32) -> Result<BinanceDepth, ClientError> {
        self.recorder.record(format!("depth {} {}", symbol, limit));
        Ok(BinanceDepth {
            last_update_id: 7,
            bids: vec![["0.0320".into(), "4".into()], ["0.0319".into(), "1".into()]],
            asks: vec![["0.0322".into(), "3".into()]],
        })
    }

    async fn deposit_address(&self, coin: &str) -> Result<BinanceDepositAddress, ClientError> {
        self.recorder.record(format!("deposit_address {}", coin));
        Ok(BinanceDepositAddress {
            coin: coin.into(),
            address: "1HPn8Rx2y6nNSfagQBKy27GB99Vbzg89wv".into(),
            tag: String::new(),
        })
    }
}

// ---------------------------------------------------------------------------
// Bittrex

pub struct FakeBittrex {
    pub recorder: Recorder,
    /// Make `get_order` fail, as if the exchange dropped the follow-up request
    pub fail_get_order: AtomicBool,
    pub fail_place: AtomicBool,
    /// Answer of `cancel_order`
    pub cancel_result: AtomicBool,
}

impl Default for FakeBittrex {
    fn default() -> Self {
        Self {
            recorder: Recorder::default(),
            fail_get_order: AtomicBool::new(false),
            fail_place: AtomicBool::new(false),
            cancel_result: AtomicBool::new(true),
        }
    }
}

pub const BITTREX_UUID: &str = "e606d53c-8d70-11e3-94b5-425861b86ab6";

fn bittrex_order(uuid: &str, market: &str, remaining: Decimal) -> BittrexOrder {
    BittrexOrder {
        order_uuid: uuid.into(),
        exchange: market.into(),
        order_type: "LIMIT_BUY".into(),
        quantity: Decimal::new(5, 0),
        quantity_remaining: remaining,
        limit: Some(Decimal::new(25, 4)),
        price_per_unit: None,
        opened: Some("2014-07-09T03:55:48.77".into()),
        closed: None,
        cancel_initiated: false,
    }
}

#[async_trait]
impl BittrexClient for FakeBittrex {
    async fn get_markets(&self) -> Result<Vec<BittrexMarket>, ClientError> {
        self.recorder.record("get_markets");
        let market = |name: &str, market: &str, base: &str| BittrexMarket {
            market_name: name.into(),
            market_currency: market.into(),
            base_currency: base.into(),
            is_active: true,
        };
        Ok(vec![
            market("BTC-LTC", "LTC", "BTC"),
            market("BTC-ETH", "ETH", "BTC"),
            market("USDT-BTC", "BTC", "USDT"),
        ])
    }

    async fn get_market_summaries(&self) -> Result<Vec<BittrexMarketSummary>, ClientError> {
        self.recorder.record("get_market_summaries");
        Err(failure("get_market_summaries"))
    }

    async fn get_market_summary(&self, market: &str) -> Result<BittrexMarketSummary, ClientError> {
        self.recorder.record(format!("get_market_summary {}", market));
        Err(failure("get_market_summary"))
    }

    async fn get_order_book(&self, market: &str) -> Result<BittrexOrderBook, ClientError> {
        self.recorder.record(format!("get_order_book {}", market));
        Ok(BittrexOrderBook::default())
    }

    async fn get_balances(&self) -> Result<Vec<BittrexBalance>, ClientError> {
        self.recorder.record("get_balances");
        Ok(vec![BittrexBalance {
            currency: "BTC".into(),
            balance: Decimal::new(3, 0),
            available: Decimal::new(2, 0),
            pending: Decimal::ZERO,
            crypto_address: None,
        }])
    }

    async fn get_deposit_address(
        &self,
        currency: &str,
    ) -> Result<BittrexDepositAddress, ClientError> {
        self.recorder.record(format!("get_deposit_address {}", currency));
        Ok(BittrexDepositAddress {
            currency: currency.into(),
            address: "Vy5SKeKGXUHKS2WVpJ76HYuKAu3URastUo".into(),
        })
    }

    async fn place_order(
        &self,
        request: &BittrexOrderRequest,
    ) -> Result<BittrexOrderAccepted, ClientError> {
        self.recorder
            .record(format!("place_order {} {}", request.market, request.order_type));
        if self.fail_place.load(Ordering::SeqCst) {
            return Err(failure("place_order"));
        }
        Ok(BittrexOrderAccepted {
            uuid: BITTREX_UUID.into(),
        })
    }

    async fn cancel_order(&self, uuid: &str) -> Result<bool, ClientError> {
        self.recorder.record(format!("cancel_order {}", uuid));
        Ok(self.cancel_result.load(Ordering::SeqCst))
    }

    async fn get_order(&self, uuid: &str) -> Result<BittrexOrder, ClientError> {
        self.recorder.record(format!("get_order {}", uuid));
        if self.fail_get_order.load(Ordering::SeqCst) {
            return Err(failure("get_order"));
        }
        Ok(bittrex_order(uuid, "BTC-LTC", Decimal::new(5, 0)))
    }

    async fn get_order_history(&self, market: &str) -> Result<Vec<BittrexOrder>, ClientError> {
        self.recorder.record(format!("get_order_history {}", market));
        Ok(vec![
            bittrex_order("a", market, Decimal::ZERO),
            bittrex_order("b", market, Decimal::new(2, 0)),
            bittrex_order("c", market, Decimal::ZERO),
        ])
    }

    async fn get_open_orders(&self, market: &str) -> Result<Vec<BittrexOrder>, ClientError> {
        self.recorder.record(format!("get_open_orders {}", market));
        Ok(vec![])
    }
}

// ---------------------------------------------------------------------------
// Coinbase Pro

#[derive(Default)]
pub struct FakeCoinbasePro {
    pub recorder: Recorder,
}

#[async_trait]
impl CoinbaseProClient for FakeCoinbasePro {
    async fn get_products(&self) -> Result<Vec<CoinbaseProduct>, ClientError> {
        self.recorder.record("get_products");
        let product = |id: &str, base: &str, quote: &str| CoinbaseProduct {
            id: id.into(),
            base_currency: base.into(),
            quote_currency: quote.into(),
            status: Some("online".into()),
        };
        Ok(vec![product("ETH-BTC", "ETH", "BTC"), product("BTC-USD", "BTC", "USD")])
    }

    async fn get_accounts(&self) -> Result<Vec<CoinbaseAccount>, ClientError> {
        self.recorder.record("get_accounts");
        Ok(vec![])
    }

    async fn place_order(
        &self,
        request: &CoinbaseOrderRequest,
    ) -> Result<CoinbaseOrder, ClientError> {
        self.recorder
            .record(format!("place_order {} {}", request.product_id, request.order_type));
        Ok(CoinbaseOrder {
            id: "d0c5340b-6d6c-49d9-b567-48c4bfca13d2".into(),
            product_id: request.product_id.clone(),
            side: request.side.clone(),
            order_type: request.order_type.clone(),
            price: request.price.clone(),
            size: Some(request.size.clone()),
            filled_size: Some("0".into()),
            status: "pending".into(),
            done_reason: None,
            stop_price: request.stop_price.clone(),
            created_at: "2016-12-08T20:02:28.53864Z".into(),
            done_at: None,
            settled: false,
        })
    }

    async fn cancel_order(&self, order_id: &str) -> Result<bool, ClientError> {
        self.recorder.record(format!("cancel_order {}", order_id));
        Ok(true)
    }

    async fn get_order(&self, order_id: &str) -> Result<CoinbaseOrder, ClientError> {
        self.recorder.record(format!("get_order {}", order_id));
        Err(failure("get_order"))
    }

    async fn get_open_orders(&self, product_id: &str) -> Result<Vec<CoinbaseOrder>, ClientError> {
        self.recorder.record(format!("get_open_orders {}", product_id));
        Ok(vec![])
    }

    async fn get_product_stats(
        &self,
        product_id: &str,
    ) -> Result<CoinbaseProductStats, ClientError> {
        self.recorder.record(format!("get_product_stats {}", product_id));
        Err(failure("get_product_stats"))
    }

    async fn get_product_ticker(
        &self,
        product_id: &str,
    ) -> Result<CoinbaseProductTicker, ClientError> {
        self.recorder.record(format!("get_product_ticker {}", product_id));
        Err(failure("get_product_ticker"))
    }

    async fn get_product_book(
        &self,
        product_id: &str,
        level: u8,
    ) -> Result<CoinbaseOrderBook, ClientError> {
        self.recorder
            .record(format!("get_product_book {} {}", product_id, level));
        Ok(CoinbaseOrderBook {
            sequence: 3,
            bids: vec![],
            asks: vec![],
        })
    }
}

// ---------------------------------------------------------------------------
// KuCoin

pub const KUCOIN_ORDER_ID: &str = "5bd6e9286d99522a52e458de";

pub struct FakeKuCoin {
    pub recorder: Recorder,
    pub fail_ticker: AtomicBool,
    pub fail_get_order: AtomicBool,
    /// Sides on which `cancel_order` answers `true`
    pub cancelable_sides: Mutex<Vec<&'static str>>,
    /// Make `cancel_order` error on every side instead of answering `false`
    pub fail_cancel: AtomicBool,
    pub placed: Mutex<Vec<KuCoinOrderRequest>>,
    pub candle_window: Mutex<Option<(i64, i64)>>,
    pub symbols_fetched: AtomicUsize,
}

impl Default for FakeKuCoin {
    fn default() -> Self {
        Self {
            recorder: Recorder::default(),
            fail_ticker: AtomicBool::new(false),
            fail_get_order: AtomicBool::new(false),
            cancelable_sides: Mutex::new(vec!["buy"]),
            fail_cancel: AtomicBool::new(false),
            placed: Mutex::new(vec![]),
            candle_window: Mutex::new(None),
            symbols_fetched: AtomicUsize::new(0),
        }
    }
}

fn kucoin_account(account_type: &str, currency: &str, available: &str, holds: &str) -> KuCoinAccount {
    KuCoinAccount {
        id: format!("{}-{}", account_type, currency),
        currency: currency.into(),
        account_type: account_type.into(),
        balance: "0".into(),
        available: available.into(),
        holds: holds.into(),
    }
}

#[async_trait]
impl KuCoinClient for FakeKuCoin {
    async fn get_symbols(&self) -> Result<Vec<KuCoinSymbol>, ClientError> {
        self.recorder.record("get_symbols");
        self.symbols_fetched.fetch_add(1, Ordering::SeqCst);
        let symbol = |symbol: &str, base: &str, quote: &str| KuCoinSymbol {
            symbol: symbol.into(),
            base_currency: base.into(),
            quote_currency: quote.into(),
            enable_trading: true,
        };
        Ok(vec![
            symbol("ETH-BTC", "ETH", "BTC"),
            symbol("KCS-BTC", "KCS", "BTC"),
            symbol("KCS-USDT", "KCS", "USDT"),
        ])
    }

    async fn get_accounts(&self) -> Result<Vec<KuCoinAccount>, ClientError> {
        self.recorder.record("get_accounts");
        Ok(vec![
            kucoin_account("main", "BTC", "9", "0"),
            kucoin_account("trade", "BTC", "1.2", "0.3"),
            kucoin_account("trade", "KCS", "10", "0"),
        ])
    }

    async fn get_ticker(&self, symbol: &str) -> Result<KuCoinTicker, ClientError> {
        self.recorder.record(format!("get_ticker {}", symbol));
        if self.fail_ticker.load(Ordering::SeqCst) {
            return Err(failure("get_ticker"));
        }
        Ok(KuCoinTicker {
            sequence: "1550467636704".into(),
            price: "0.03715005".into(),
            size: "0.17".into(),
            best_bid: "0.03710768".into(),
            best_bid_size: "3.803".into(),
            best_ask: "0.03715004".into(),
            best_ask_size: "1.788".into(),
            time: 1_550_653_727_731,
        })
    }

    async fn get_24h_stats(&self, symbol: &str) -> Result<KuCoin24hStats, ClientError> {
        self.recorder.record(format!("get_24h_stats {}", symbol));
        Ok(KuCoin24hStats {
            symbol: symbol.into(),
            high: Some("0.0375".into()),
            low: Some("0.0360".into()),
            vol: Some("5000".into()),
            last: Some("0.03715005".into()),
            change_price: Some("0.00015005".into()),
            change_rate: Some("0.0041".into()),
            average_price: Some("0.0368".into()),
            time: 1_550_653_727_731,
        })
    }

    async fn get_all_tickers(&self) -> Result<KuCoinAllTickers, ClientError> {
        self.recorder.record("get_all_tickers");
        Ok(KuCoinAllTickers {
            time: 1_602_832_092_060,
            ticker: vec![
                KuCoinTickerItem {
                    symbol: "ETH-BTC".into(),
                    last: Some("0.0371".into()),
                },
                KuCoinTickerItem {
                    symbol: "NEW-BTC".into(),
                    last: None,
                },
            ],
        })
    }

    async fn get_order_book(&self, symbol: &str, depth: u32) -> Result<KuCoinOrderBook, ClientError> {
        self.recorder.record(format!("get_order_book {} {}", symbol, depth));
        let levels = |start: i64| -> Vec<[String; 2]> {
            (0..25)
                .map(|i| [Decimal::new(start + i, 4).to_string(), "1".to_string()])
                .collect()
        };
        Ok(KuCoinOrderBook {
            sequence: "3262786978".into(),
            time: 1_550_653_727_731,
            bids: levels(300),
            asks: levels(400),
        })
    }

    async fn get_candles(
        &self,
        symbol: &str,
        interval: &str,
        start_at: i64,
        end_at: i64,
    ) -> Result<Vec<KuCoinCandle>, ClientError> {
        self.recorder.record(format!("get_candles {} {}", symbol, interval));
        *self.candle_window.lock().unwrap() = Some((start_at, end_at));
        let candle = |start: i64| KuCoinCandle {
            start: start.to_string(),
            open: "0.0371".into(),
            close: "0.0372".into(),
            high: "0.0375".into(),
            low: "0.0370".into(),
            volume: "12".into(),
        };
        Ok(vec![candle(end_at - 60), candle(end_at - 120), candle(end_at - 180)])
    }

    async fn get_deposit_address(
        &self,
        currency: &str,
    ) -> Result<KuCoinDepositAddress, ClientError> {
        self.recorder.record(format!("get_deposit_address {}", currency));
        Ok(KuCoinDepositAddress {
            address: "rLHzPsX6oXkzU2qL12kHCH8G8cnZv1rBJh".into(),
            memo: Some("3417823".into()),
            chain: None,
        })
    }

    async fn place_order(
        &self,
        request: &KuCoinOrderRequest,
    ) -> Result<KuCoinOrderAccepted, ClientError> {
        self.recorder
            .record(format!("place_order {} {}", request.symbol, request.order_type));
        self.placed.lock().unwrap().push(request.clone());
        Ok(KuCoinOrderAccepted {
            order_id: KUCOIN_ORDER_ID.into(),
        })
    }

    async fn cancel_order(
        &self,
        symbol: &str,
        order_id: &str,
        side: &str,
    ) -> Result<bool, ClientError> {
        self.recorder
            .record(format!("cancel_order {} {} {}", symbol, order_id, side));
        if self.fail_cancel.load(Ordering::SeqCst) {
            return Err(failure(&format!("cancel_order {}", side)));
        }
        Ok(self
            .cancelable_sides
            .lock()
            .unwrap()
            .iter()
            .any(|cancelable| *cancelable == side))
    }

    async fn get_order(&self, order_id: &str) -> Result<KuCoinOrder, ClientError> {
        self.recorder.record(format!("get_order {}", order_id));
        if self.fail_get_order.load(Ordering::SeqCst) {
            return Err(failure("get_order"));
        }
        let placed = self.placed.lock().unwrap().last().cloned();
        Ok(KuCoinOrder {
            id: order_id.into(),
            symbol: placed
                .as_ref()
                .map_or_else(|| "ETH-BTC".into(), |request| request.symbol.clone()),
            order_type: "limit".into(),
            side: placed
                .as_ref()
                .map_or_else(|| "buy".into(), |request| request.side.clone()),
            price: placed
                .as_ref()
                .and_then(|request| request.price.clone())
                .unwrap_or_else(|| "0.0371".into()),
            size: placed
                .as_ref()
                .map_or_else(|| "2".into(), |request| request.size.clone()),
            deal_size: "0".into(),
            stop_price: None,
            is_active: true,
            cancel_exist: false,
            created_at: 1_547_026_471_000,
        })
    }

    async fn list_orders(
        &self,
        symbol: &str,
        status: Option<&str>,
        page_size: u32,
    ) -> Result<Vec<KuCoinOrder>, ClientError> {
        self.recorder.record(format!(
            "list_orders {} {} {}",
            symbol,
            status.unwrap_or("any"),
            page_size
        ));
        Ok(vec![])
    }
}

// ---------------------------------------------------------------------------
// Factory

/// Hands out the fakes above, counting how often it was asked
pub struct FakeFactory {
    pub binance: Arc<FakeBinance>,
    pub bittrex: Arc<FakeBittrex>,
    pub coinbase_pro: Arc<FakeCoinbasePro>,
    pub kucoin: Arc<FakeKuCoin>,
    pub created: AtomicUsize,
    /// Answer every request with the Binance client
    pub always_binance: AtomicBool,
}

impl FakeFactory {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            binance: Arc::default(),
            bittrex: Arc::default(),
            coinbase_pro: Arc::default(),
            kucoin: Arc::default(),
            created: AtomicUsize::new(0),
            always_binance: AtomicBool::new(false),
        })
    }

    pub fn created(&self) -> usize {
        self.created.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ClientFactory for FakeFactory {
    async fn create(
        &self,
        exchange: Exchange,
        _credentials: &ApiInformation,
    ) -> Result<ExchangeClient, ClientError> {
        self.created.fetch_add(1, Ordering::SeqCst);
        if self.always_binance.load(Ordering::SeqCst) {
            return Ok(ExchangeClient::Binance(self.binance.clone()));
        }
        match exchange {
            Exchange::Binance => Ok(ExchangeClient::Binance(self.binance.clone())),
            Exchange::Bittrex => Ok(ExchangeClient::Bittrex(self.bittrex.clone())),
            Exchange::CoinbasePro => Ok(ExchangeClient::CoinbasePro(self.coinbase_pro.clone())),
            Exchange::KuCoin => Ok(ExchangeClient::KuCoin(self.kucoin.clone())),
            other => Err(format!("no client for {}", other).into()),
        }
    }
}

pub fn credentials() -> ApiInformation {
    ApiInformation::new("key".into(), "secret".into()).with_extra("passphrase".into())
}
