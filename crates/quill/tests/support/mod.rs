#![allow(dead_code)]

use quill::{
    async_trait,
    driver::{
        operation::{Operation, Transaction},
        Connection, Driver, Response,
    },
    query::Path,
    schema::{Model, ModelBuilder},
    stmt::Intent,
    Result,
};
use std::{
    collections::VecDeque,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
    time::Duration,
};

pub struct Person {
    pub id: i64,
    pub name: String,
    pub age: i32,
}

impl Person {
    pub const NAME: Path<Person, String> = Path::new("Name");
    pub const AGE: Path<Person, i32> = Path::new("Age");

    pub fn new(name: &str, age: i32) -> Person {
        Person {
            id: 0,
            name: name.to_string(),
            age,
        }
    }
}

impl Model for Person {
    fn describe(model: &mut ModelBuilder<Self>) {
        model.field("Id", |p| &p.id).primary_key().auto_increment();
        model.field("Name", |p| &p.name);
        model.field("Age", |p| &p.age);
    }
}

/// What a [`MockDriver`] saw, tagged with the connection id.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Connect(usize),
    Begin(usize),
    Commit(usize),
    Rollback(usize),
    Sql(usize, String),
}

/// Records every operation and answers from a script, falling back to a
/// response shaped by the statement's intent.
#[derive(Debug, Clone, Default)]
pub struct MockDriver {
    state: Arc<State>,
}

#[derive(Debug, Default)]
struct State {
    events: Mutex<Vec<Event>>,
    responses: Mutex<VecDeque<Result<Response>>>,
    connections: AtomicUsize,
    delay: Mutex<Option<Duration>>,
}

impl MockDriver {
    pub fn new() -> MockDriver {
        MockDriver::default()
    }

    /// Queue the response for the next SQL statement.
    pub fn respond(&self, response: Result<Response>) -> &Self {
        self.state.responses.lock().unwrap().push_back(response);
        self
    }

    /// Make every SQL statement take `delay`.
    pub fn delay(&self, delay: Duration) {
        *self.state.delay.lock().unwrap() = Some(delay);
    }

    pub fn events(&self) -> Vec<Event> {
        self.state.events.lock().unwrap().clone()
    }

    pub fn sql(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::Sql(_, sql) => Some(sql),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, f: impl Fn(&Event) -> bool) -> usize {
        self.events().iter().filter(|event| f(event)).count()
    }

    fn record(&self, event: Event) {
        self.state.events.lock().unwrap().push(event);
    }
}

#[async_trait]
impl Driver for MockDriver {
    async fn connect(&self) -> Result<Box<dyn Connection>> {
        let id = self.state.connections.fetch_add(1, Ordering::SeqCst);
        self.record(Event::Connect(id));

        Ok(Box::new(MockConnection {
            id,
            driver: self.clone(),
        }))
    }
}

#[derive(Debug)]
struct MockConnection {
    id: usize,
    driver: MockDriver,
}

#[async_trait]
impl Connection for MockConnection {
    async fn exec(&mut self, op: Operation) -> Result<Response> {
        let query = match op {
            Operation::Transaction(op) => {
                self.driver.record(match op {
                    Transaction::Start => Event::Begin(self.id),
                    Transaction::Commit => Event::Commit(self.id),
                    Transaction::Rollback => Event::Rollback(self.id),
                });
                return Ok(Response::count(0));
            }
            Operation::QuerySql(query) => query,
        };

        self.driver.record(Event::Sql(self.id, query.sql.clone()));

        let delay = *self.driver.state.delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let scripted = self.driver.state.responses.lock().unwrap().pop_front();

        match scripted {
            Some(response) => response,
            None => Ok(match query.intent {
                Intent::Execute => Response::count(1),
                Intent::Scalar => Response::scalar(1i64),
                Intent::Query => Response::values(vec![]),
            }),
        }
    }
}
