mod support;
use support::*;

use pretty_assertions::assert_eq;
use quill::{transaction::call_chain, Db, Error, Flavor, Result};
use std::sync::Arc;
use tokio::sync::Barrier;

fn db(driver: &MockDriver) -> Db {
    Db::builder()
        .flavor(Flavor::Sqlite)
        .build(driver.clone())
        .unwrap()
}

fn is_commit(event: &Event) -> bool {
    matches!(event, Event::Commit(_))
}

fn is_rollback(event: &Event) -> bool {
    matches!(event, Event::Rollback(_))
}

#[tokio::test]
async fn root_scope_commits() {
    let driver = MockDriver::new();
    let db = db(&driver);

    call_chain(async {
        let mut scope = db.scope().await.unwrap();
        assert!(scope.is_root());

        db.drop_table::<Person>().await.unwrap();

        scope.complete().await.unwrap();
        scope.dispose().await.unwrap();
    })
    .await;

    assert_eq!(
        driver.events(),
        [
            Event::Connect(0),
            Event::Begin(0),
            Event::Sql(0, "DROP TABLE \"Person\";".to_string()),
            Event::Commit(0),
        ]
    );
}

#[tokio::test]
async fn nested_complete_defers_to_root() {
    let driver = MockDriver::new();
    let db = db(&driver);

    call_chain(async {
        let mut outer = db.scope().await.unwrap();

        let mut inner = db.scope().await.unwrap();
        assert!(!inner.is_root());

        db.drop_table::<Person>().await.unwrap();
        inner.complete().await.unwrap();
        inner.dispose().await.unwrap();

        assert_eq!(driver.count(is_commit), 0);
        assert!(outer.is_active());

        outer.complete().await.unwrap();
        outer.dispose().await.unwrap();
    })
    .await;

    assert_eq!(driver.count(|event| matches!(event, Event::Connect(_))), 1);
    assert_eq!(driver.count(is_commit), 1);
    assert_eq!(driver.count(is_rollback), 0);
}

#[tokio::test]
async fn nested_dispose_without_complete_rolls_back() {
    let driver = MockDriver::new();
    let db = db(&driver);

    call_chain(async {
        let mut outer = db.scope().await.unwrap();
        let inner = db.scope().await.unwrap();

        inner.dispose().await.unwrap();

        assert_eq!(driver.count(is_rollback), 1);
        assert!(!outer.is_active());

        let err = outer.complete().await.unwrap_err();
        assert!(err.is_transaction_state());
        assert_eq!(
            err.to_string(),
            "transaction state: transaction already rolled back"
        );

        outer.dispose().await.unwrap();
    })
    .await;

    assert_eq!(driver.count(is_commit), 0);
    assert_eq!(driver.count(is_rollback), 1);
}

#[tokio::test]
async fn nested_complete_after_root_commit() {
    let driver = MockDriver::new();
    let db = db(&driver);

    call_chain(async {
        let mut outer = db.scope().await.unwrap();
        let mut inner = db.scope().await.unwrap();

        outer.complete().await.unwrap();
        assert!(!inner.is_active());

        let err = inner.complete().await.unwrap_err();
        assert!(err.is_transaction_state());
        assert_eq!(
            err.to_string(),
            "transaction state: transaction already committed"
        );

        inner.dispose().await.unwrap();
        outer.dispose().await.unwrap();
    })
    .await;

    assert_eq!(driver.count(is_commit), 1);
    assert_eq!(driver.count(is_rollback), 0);
}

#[tokio::test]
async fn cancel_clears_the_ambient_root() {
    let driver = MockDriver::new();
    let db = db(&driver);

    call_chain(async {
        let scope = db.scope().await.unwrap();
        scope.cancel().await.unwrap();

        // A new scope opens a new physical transaction.
        let mut scope = db.scope().await.unwrap();
        assert!(scope.is_root());
        scope.complete().await.unwrap();
    })
    .await;

    assert_eq!(
        driver.events(),
        [
            Event::Connect(0),
            Event::Begin(0),
            Event::Rollback(0),
            Event::Connect(1),
            Event::Begin(1),
            Event::Commit(1),
        ]
    );
}

#[tokio::test]
async fn statements_after_the_scope_use_fresh_connections() {
    let driver = MockDriver::new();
    let db = db(&driver);

    call_chain(async {
        let mut scope = db.scope().await.unwrap();
        scope.complete().await.unwrap();

        db.drop_table::<Person>().await.unwrap();
    })
    .await;

    assert_eq!(
        driver.events().last(),
        Some(&Event::Sql(1, "DROP TABLE \"Person\";".to_string()))
    );
}

#[tokio::test]
async fn scope_outside_a_call_chain_fails() {
    let driver = MockDriver::new();
    let db = db(&driver);

    let err = db.scope().await.unwrap_err();

    assert!(err.is_transaction_state());
    assert!(driver.events().is_empty());
}

#[tokio::test]
async fn dropped_scope_rolls_back() {
    let driver = MockDriver::new();
    let db = db(&driver);

    call_chain(async {
        let scope = db.scope().await.unwrap();
        drop(scope);
    })
    .await;

    for _ in 0..100 {
        if driver.count(is_rollback) == 1 {
            break;
        }
        tokio::task::yield_now().await;
    }

    assert_eq!(driver.count(is_rollback), 1);
    assert_eq!(driver.count(is_commit), 0);
}

#[tokio::test]
async fn transaction_commits_on_success() {
    let driver = MockDriver::new();
    let db = db(&driver);

    let count = db
        .transaction(async {
            db.drop_table::<Person>().await?;
            db.create_table::<Person>().await?;
            Ok::<_, Error>(2)
        })
        .await
        .unwrap();

    assert_eq!(count, 2);
    assert_eq!(driver.count(|event| matches!(event, Event::Sql(0, _))), 2);
    assert_eq!(driver.count(is_commit), 1);
}

#[tokio::test]
async fn transaction_rolls_back_on_error() {
    let driver = MockDriver::new();
    let db = db(&driver);

    let res: Result<()> = db
        .transaction(async {
            db.drop_table::<Person>().await?;
            Err(Error::transaction_state("abort"))
        })
        .await;

    assert!(res.unwrap_err().is_transaction_state());
    assert_eq!(driver.count(is_commit), 0);
    assert_eq!(driver.count(is_rollback), 1);
}

#[tokio::test]
async fn nested_transaction_failure_rolls_back_outer() {
    let driver = MockDriver::new();
    let db = db(&driver);

    let res = db
        .transaction(async {
            let inner: Result<()> = db
                .transaction(async { Err(Error::transaction_state("inner failed")) })
                .await;
            assert!(inner.is_err());

            db.drop_table::<Person>().await?;
            Ok::<_, Error>(())
        })
        .await;

    // The inner rollback ended the outer transaction too.
    assert!(res.unwrap_err().is_transaction_state());
    assert_eq!(driver.count(is_commit), 0);
    assert_eq!(driver.count(is_rollback), 1);
}

#[tokio::test]
async fn concurrent_chains_are_isolated() {
    let driver = MockDriver::new();
    let db = db(&driver);
    let barrier = Arc::new(Barrier::new(2));

    let tasks: Vec<_> = (0..2)
        .map(|_| {
            let db = db.clone();
            let barrier = barrier.clone();

            tokio::spawn(call_chain(async move {
                let mut scope = db.scope().await.unwrap();
                let is_root = scope.is_root();

                // Both scopes are open at the same time.
                barrier.wait().await;

                scope.complete().await.unwrap();
                is_root
            }))
        })
        .collect();

    for task in tasks {
        assert!(task.await.unwrap());
    }

    assert_eq!(driver.count(|event| matches!(event, Event::Begin(_))), 2);
    assert_eq!(driver.count(is_commit), 2);
}
