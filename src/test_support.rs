//! In-memory backend and fixtures shared by unit tests.

use crate::domain::{Hero, HeroboardError, Result};
use crate::transport::{Method, Request, Response, Transport};
use futures_util::future::BoxFuture;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub fn hero(id: &str, name: &str, identity: &str) -> Hero {
    Hero {
        id: id.into(),
        name: name.into(),
        secret_identity: identity.into(),
        publisher: "DC Comics".into(),
        first_appearance: "1939".into(),
        image: None,
        alt_image: None,
    }
}

pub fn batman() -> Hero {
    hero("1", "Batman", "Bruce Wayne")
}

pub fn superman() -> Hero {
    hero("2", "Superman", "Clark Kent")
}

#[derive(Default)]
struct Inner {
    heroes: Vec<Hero>,
    log: Vec<(Method, String)>,
    failures: HashMap<(Method, String), u16>,
    delays: HashMap<String, Duration>,
    next_id: u64,
}

/// A json-server-like backend living in memory.
///
/// Records every request, can be told to fail a given method/path with a
/// status (`0` meaning a network failure) and to delay delivery per path.
#[derive(Clone, Default)]
pub struct FakeBackend {
    inner: Arc<Mutex<Inner>>,
}

impl FakeBackend {
    pub fn with_heroes(heroes: Vec<Hero>) -> Self {
        let backend = Self::default();
        {
            let mut inner = backend.inner.lock().unwrap();
            inner.next_id = 100;
            inner.heroes = heroes;
        }
        backend
    }

    pub fn fail(&self, method: Method, path: &str, status: u16) {
        self.inner.lock().unwrap().failures.insert((method, path.to_string()), status);
    }

    pub fn heal(&self, method: Method, path: &str) {
        self.inner.lock().unwrap().failures.remove(&(method, path.to_string()));
    }

    pub fn delay(&self, path: &str, delay: Duration) {
        self.inner.lock().unwrap().delays.insert(path.to_string(), delay);
    }

    pub fn requests(&self) -> Vec<(Method, String)> {
        self.inner.lock().unwrap().log.clone()
    }

    pub fn count(&self, method: Method, path: &str) -> usize {
        self.requests()
            .iter()
            .filter(|(m, p)| *m == method && p == path)
            .count()
    }

    pub fn heroes(&self) -> Vec<Hero> {
        self.inner.lock().unwrap().heroes.clone()
    }

    fn respond(&self, request: &Request) -> Result<Response> {
        let mut inner = self.inner.lock().unwrap();
        if let Some(status) = inner.failures.get(&(request.method, request.path.clone())) {
            return Err(match status {
                0 => HeroboardError::Network("connection refused".into()),
                s => HeroboardError::Status { status: *s, message: "failure".into() },
            });
        }

        let id = request.path.strip_prefix("/heroes/").map(str::to_string);
        let not_found = || HeroboardError::Status { status: 404, message: "Not Found".into() };
        let ok = |body: Value| Ok(Response { status: 200, body });

        match (request.method, id) {
            (Method::Get, None) => ok(serde_json::to_value(&inner.heroes)?),
            (Method::Get, Some(id)) => {
                let found = inner.heroes.iter().find(|h| h.id == id).ok_or_else(not_found)?;
                ok(serde_json::to_value(found)?)
            }
            (Method::Post, None) => {
                inner.next_id += 1;
                let mut body = request.body.clone().unwrap_or(Value::Null);
                body["id"] = Value::String(inner.next_id.to_string());
                let created: Hero = serde_json::from_value(body)?;
                inner.heroes.push(created.clone());
                ok(serde_json::to_value(created)?)
            }
            (Method::Put, Some(id)) => {
                let updated: Hero = serde_json::from_value(request.body.clone().unwrap_or(Value::Null))?;
                let slot = inner.heroes.iter_mut().find(|h| h.id == id).ok_or_else(not_found)?;
                *slot = updated.clone();
                ok(serde_json::to_value(updated)?)
            }
            (Method::Delete, Some(id)) => {
                let before = inner.heroes.len();
                inner.heroes.retain(|h| h.id != id);
                if inner.heroes.len() == before {
                    return Err(not_found());
                }
                ok(serde_json::json!({}))
            }
            _ => Err(HeroboardError::Status { status: 405, message: "Method Not Allowed".into() }),
        }
    }
}

impl Transport for FakeBackend {
    fn send(&self, request: Request) -> BoxFuture<'_, Result<Response>> {
        Box::pin(async move {
            let delay = {
                let mut inner = self.inner.lock().unwrap();
                inner.log.push((request.method, request.path.clone()));
                inner.delays.get(&request.path).copied()
            };
            // The answer reflects the state at request time, not at delivery.
            let outcome = self.respond(&request);
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }
            outcome
        })
    }
}

/// Captures formatted tracing output for assertions.
#[derive(Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl LogCapture {
    /// Installs a capturing subscriber as the thread default.
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(self.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::TRACE)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl std::io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for LogCapture {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
