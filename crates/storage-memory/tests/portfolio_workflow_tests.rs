//! End-to-end tests wiring the core services to the in-memory store.

use std::sync::Arc;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use stockfolio_core::notes::{NewNote, NoteRepositoryTrait, NoteService, NoteServiceTrait, NoteUpdate};
use stockfolio_core::portfolio::allocation::{AllocationService, AllocationServiceTrait};
use stockfolio_core::portfolio::holdings::{HoldingsService, HoldingsServiceTrait};
use stockfolio_core::stocks::{
    NewStock, StockRepositoryTrait, StockService, StockServiceTrait, StockUpdate,
};
use stockfolio_core::transactions::{
    NewTransaction, TransactionRepositoryTrait, TransactionService, TransactionServiceTrait,
    TransactionUpdate,
};
use stockfolio_storage_memory::notes::NoteRepository;
use stockfolio_storage_memory::stocks::StockRepository;
use stockfolio_storage_memory::transactions::TransactionRepository;
use stockfolio_storage_memory::MemoryStore;

struct PortfolioApp {
    stock_service: StockService,
    transaction_service: TransactionService,
    note_service: NoteService,
    holdings_service: Arc<HoldingsService>,
    allocation_service: AllocationService,
}

/// Wires every service to repositories sharing one [`MemoryStore`].
fn build_portfolio_app() -> PortfolioApp {
    let store = Arc::new(MemoryStore::new());
    let stock_repository: Arc<dyn StockRepositoryTrait> =
        Arc::new(StockRepository::new(store.clone()));
    let transaction_repository: Arc<dyn TransactionRepositoryTrait> =
        Arc::new(TransactionRepository::new(store.clone()));
    let note_repository: Arc<dyn NoteRepositoryTrait> = Arc::new(NoteRepository::new(store));

    let holdings_service = Arc::new(HoldingsService::new(
        stock_repository.clone(),
        transaction_repository.clone(),
    ));

    PortfolioApp {
        stock_service: StockService::new(stock_repository.clone()),
        transaction_service: TransactionService::new(
            transaction_repository,
            stock_repository.clone(),
        ),
        note_service: NoteService::new(note_repository, stock_repository),
        holdings_service: holdings_service.clone(),
        allocation_service: AllocationService::new(holdings_service),
    }
}

fn new_stock(symbol: &str, name: &str, sector: Option<&str>) -> NewStock {
    NewStock {
        id: None,
        symbol: symbol.to_string(),
        name: name.to_string(),
        currency: "USD".to_string(),
        sector: sector.map(String::from),
    }
}

fn buy(stock_id: &str, quantity: Decimal, unit_price: Decimal) -> NewTransaction {
    NewTransaction {
        id: None,
        stock_id: stock_id.to_string(),
        transaction_type: "BUY".to_string(),
        transaction_date: "2024-01-15".to_string(),
        quantity,
        unit_price,
        currency: "USD".to_string(),
        exchange_rate: None,
        fx_fee: None,
        notes: None,
    }
}

fn sell(stock_id: &str, quantity: Decimal, unit_price: Decimal) -> NewTransaction {
    NewTransaction {
        transaction_type: "SELL".to_string(),
        transaction_date: "2024-06-15".to_string(),
        ..buy(stock_id, quantity, unit_price)
    }
}

fn new_note(stock_id: &str, content: &str) -> NewNote {
    NewNote {
        id: None,
        stock_id: stock_id.to_string(),
        content: content.to_string(),
    }
}

// ==================== Workflows ====================

#[tokio::test]
async fn test_full_portfolio_workflow() {
    let app = build_portfolio_app();

    let apple = app
        .stock_service
        .create_stock(new_stock("AAPL", "Apple Inc.", Some("Technology")))
        .await
        .unwrap();
    let microsoft = app
        .stock_service
        .create_stock(new_stock("MSFT", "Microsoft Corporation", Some("Technology")))
        .await
        .unwrap();
    let novo = app
        .stock_service
        .create_stock(new_stock("NVO", "Novo Nordisk", Some("Healthcare")))
        .await
        .unwrap();

    app.transaction_service
        .create_transaction(buy(&apple.id, dec!(10), dec!(175.5)))
        .await
        .unwrap();
    app.transaction_service
        .create_transaction(sell(&apple.id, dec!(3), dec!(190.5)))
        .await
        .unwrap();
    app.transaction_service
        .create_transaction(buy(&microsoft.id, dec!(1), dec!(271.5)))
        .await
        .unwrap();
    app.transaction_service
        .create_transaction(buy(&novo.id, dec!(10), dec!(30)))
        .await
        .unwrap();

    let holdings = app.holdings_service.get_holdings("USD").unwrap();
    assert_eq!(holdings.len(), 3);

    let apple_holding = holdings
        .iter()
        .find(|holding| holding.stock.symbol == "AAPL")
        .unwrap();
    assert_eq!(apple_holding.quantity, dec!(7));
    assert_eq!(apple_holding.average_cost, dec!(175.5));
    assert_eq!(apple_holding.book_value, dec!(1228.5));
    assert_eq!(apple_holding.transaction_count, 2);

    let allocation = app.allocation_service.get_portfolio_allocation("USD").unwrap();
    assert_eq!(allocation.base_currency, "USD");
    assert_eq!(allocation.total_value, dec!(1800));
    assert_eq!(allocation.sectors.len(), 2);
    assert_eq!(allocation.sectors[0].sector, "Technology");
    assert_eq!(allocation.sectors[0].value, dec!(1500));
    assert_eq!(allocation.sectors[0].percentage, dec!(83.33));
    assert_eq!(allocation.sectors[1].sector, "Healthcare");
    assert_eq!(allocation.sectors[1].value, dec!(300));
    assert_eq!(allocation.sectors[1].percentage, dec!(16.67));
}

#[tokio::test]
async fn test_deleting_stock_removes_dependent_records() {
    let app = build_portfolio_app();

    let apple = app
        .stock_service
        .create_stock(new_stock("AAPL", "Apple Inc.", None))
        .await
        .unwrap();
    let microsoft = app
        .stock_service
        .create_stock(new_stock("MSFT", "Microsoft Corporation", None))
        .await
        .unwrap();

    app.transaction_service
        .create_transaction(buy(&apple.id, dec!(10), dec!(100)))
        .await
        .unwrap();
    app.transaction_service
        .create_transaction(sell(&apple.id, dec!(2), dec!(110)))
        .await
        .unwrap();
    app.transaction_service
        .create_transaction(buy(&microsoft.id, dec!(5), dec!(200)))
        .await
        .unwrap();
    app.note_service
        .create_note(new_note(&apple.id, "Review after earnings"))
        .await
        .unwrap();

    app.stock_service.delete_stock(apple.id.clone()).await.unwrap();

    assert!(app.stock_service.get_stock(&apple.id).is_err());
    assert!(app
        .transaction_service
        .get_transactions_by_stock_id(&apple.id)
        .unwrap()
        .is_empty());
    assert!(app
        .note_service
        .get_notes_by_stock_id(&apple.id)
        .unwrap()
        .is_empty());

    let holdings = app.holdings_service.get_holdings("USD").unwrap();
    assert_eq!(holdings.len(), 1);
    assert_eq!(holdings[0].stock.symbol, "MSFT");
}

#[tokio::test]
async fn test_duplicate_symbol_rejected_case_insensitively() {
    let app = build_portfolio_app();

    app.stock_service
        .create_stock(new_stock("AAPL", "Apple Inc.", None))
        .await
        .unwrap();
    let err = app
        .stock_service
        .create_stock(new_stock("aapl", "Apple duplicate", None))
        .await
        .unwrap_err();

    assert!(err.to_string().contains("already exists"));
    assert_eq!(app.stock_service.get_stocks().unwrap().len(), 1);
}

#[tokio::test]
async fn test_transaction_rejected_for_unknown_stock() {
    let app = build_portfolio_app();

    let err = app
        .transaction_service
        .create_transaction(buy("no-such-stock", dec!(1), dec!(10)))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("not found"));
}

#[tokio::test]
async fn test_updated_transaction_flows_into_valuation() {
    let app = build_portfolio_app();
    let apple = app
        .stock_service
        .create_stock(new_stock("AAPL", "Apple Inc.", None))
        .await
        .unwrap();
    let recorded = app
        .transaction_service
        .create_transaction(buy(&apple.id, dec!(10), dec!(100)))
        .await
        .unwrap();

    let updated = app
        .transaction_service
        .update_transaction(TransactionUpdate {
            id: recorded.id.clone(),
            stock_id: apple.id.clone(),
            transaction_type: "BUY".to_string(),
            transaction_date: "2024-01-15".to_string(),
            quantity: dec!(6),
            unit_price: dec!(120),
            currency: "usd".to_string(),
            exchange_rate: None,
            fx_fee: None,
            notes: None,
        })
        .await
        .unwrap();
    assert_eq!(updated.currency, "USD");

    let holding = app.holdings_service.get_holding(&apple.id, "USD").unwrap();
    assert_eq!(holding.quantity, dec!(6));
    assert_eq!(holding.average_cost, dec!(120));
    assert_eq!(holding.book_value, dec!(720));
    assert_eq!(holding.transaction_count, 1);
}

#[tokio::test]
async fn test_deleting_transaction_restores_prior_position() {
    let app = build_portfolio_app();
    let apple = app
        .stock_service
        .create_stock(new_stock("AAPL", "Apple Inc.", None))
        .await
        .unwrap();

    app.transaction_service
        .create_transaction(buy(&apple.id, dec!(10), dec!(100)))
        .await
        .unwrap();
    let sale = app
        .transaction_service
        .create_transaction(sell(&apple.id, dec!(4), dec!(110)))
        .await
        .unwrap();

    let holding = app.holdings_service.get_holding(&apple.id, "USD").unwrap();
    assert_eq!(holding.quantity, dec!(6));

    app.transaction_service
        .delete_transaction(sale.id)
        .await
        .unwrap();

    let holding = app.holdings_service.get_holding(&apple.id, "USD").unwrap();
    assert_eq!(holding.quantity, dec!(10));
    assert_eq!(holding.book_value, dec!(1000));
    assert_eq!(holding.transaction_count, 1);
}

#[tokio::test]
async fn test_exchange_rate_normalizes_foreign_purchase() {
    let app = build_portfolio_app();
    let constellation = app
        .stock_service
        .create_stock(NewStock {
            id: None,
            symbol: "CSU".to_string(),
            name: "Constellation Software".to_string(),
            currency: "CAD".to_string(),
            sector: Some("Technology".to_string()),
        })
        .await
        .unwrap();

    app.transaction_service
        .create_transaction(NewTransaction {
            exchange_rate: Some(dec!(1.10)),
            fx_fee: Some(dec!(12.50)),
            ..buy(&constellation.id, dec!(8), dec!(320.75))
        })
        .await
        .unwrap();

    // 320.75 * 1.10 per share; the fee stays out of the average.
    let holding = app
        .holdings_service
        .get_holding(&constellation.id, "USD")
        .unwrap();
    assert_eq!(holding.average_cost, dec!(352.825));
    assert_eq!(holding.book_value, dec!(2822.6));
}

#[tokio::test]
async fn test_sector_update_moves_allocation_bucket() {
    let app = build_portfolio_app();
    let shopify = app
        .stock_service
        .create_stock(new_stock("SHOP", "Shopify", Some("Technology")))
        .await
        .unwrap();
    app.transaction_service
        .create_transaction(buy(&shopify.id, dec!(5), dec!(20)))
        .await
        .unwrap();

    let allocation = app.allocation_service.get_portfolio_allocation("USD").unwrap();
    assert_eq!(allocation.sectors[0].sector, "Technology");

    app.stock_service
        .update_stock(StockUpdate {
            id: shopify.id.clone(),
            symbol: "SHOP".to_string(),
            name: "Shopify".to_string(),
            currency: "USD".to_string(),
            sector: None,
        })
        .await
        .unwrap();

    let allocation = app.allocation_service.get_portfolio_allocation("USD").unwrap();
    assert_eq!(allocation.sectors.len(), 1);
    assert_eq!(allocation.sectors[0].sector, "Uncategorized");
    assert_eq!(allocation.sectors[0].value, dec!(100));
    assert_eq!(allocation.sectors[0].percentage, dec!(100));
}

#[tokio::test]
async fn test_empty_portfolio_reports_zero() {
    let app = build_portfolio_app();

    assert!(app.holdings_service.get_holdings("USD").unwrap().is_empty());

    let allocation = app.allocation_service.get_portfolio_allocation("USD").unwrap();
    assert_eq!(allocation.total_value, Decimal::ZERO);
    assert!(allocation.sectors.is_empty());
}

#[tokio::test]
async fn test_note_lifecycle() {
    let app = build_portfolio_app();
    let apple = app
        .stock_service
        .create_stock(new_stock("AAPL", "Apple Inc.", None))
        .await
        .unwrap();

    let note = app
        .note_service
        .create_note(new_note(&apple.id, "Watch Q1 guidance"))
        .await
        .unwrap();
    let updated = app
        .note_service
        .update_note(NoteUpdate {
            id: note.id.clone(),
            content: "Guidance raised, holding".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(updated.id, note.id);

    let notes = app.note_service.get_notes_by_stock_id(&apple.id).unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].content, "Guidance raised, holding");

    app.note_service.delete_note(note.id).await.unwrap();
    assert!(app
        .note_service
        .get_notes_by_stock_id(&apple.id)
        .unwrap()
        .is_empty());
}
