#![allow(dead_code)]

use anyhow::{Context, Result};
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{delete, get};
use axum::{Json, Router};
use cardbox::domain::{parse_tags, Card};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::{mpsc, Arc, Mutex};
use tempfile::TempDir;

/// One multipart request as received by the stub
#[derive(Debug, Clone, Default)]
pub struct RecordedUpload {
    pub fields: HashMap<String, String>,
    pub image_name: Option<String>,
    pub image_len: usize,
}

#[derive(Clone, Default)]
struct StubState {
    cards: Arc<Mutex<Vec<Card>>>,
    uploads: Arc<Mutex<Vec<RecordedUpload>>>,
    next_id: Arc<Mutex<u32>>,
}

/// In-process cards API listening on an ephemeral port
pub struct StubServer {
    pub base_url: String,
    state: StubState,
}

impl StubServer {
    /// Serve the given cards from `GET /api/cards`
    pub fn start(cards: Vec<Card>) -> Result<Self> {
        let state = StubState {
            cards: Arc::new(Mutex::new(cards)),
            ..Default::default()
        };
        let app = Router::new()
            .route("/api/cards", get(list_cards).post(create_card))
            .route("/api/cards/:id", delete(delete_card))
            .with_state(state.clone());
        let addr = serve(app)?;
        Ok(Self {
            base_url: format!("http://{}", addr),
            state,
        })
    }

    /// Answer every request with 500
    pub fn start_failing() -> Result<Self> {
        let app = Router::new().fallback(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") });
        let addr = serve(app)?;
        Ok(Self {
            base_url: format!("http://{}", addr),
            state: StubState::default(),
        })
    }

    pub fn cards(&self) -> Vec<Card> {
        self.state.cards.lock().unwrap().clone()
    }

    pub fn uploads(&self) -> Vec<RecordedUpload> {
        self.state.uploads.lock().unwrap().clone()
    }
}

fn serve(app: Router) -> Result<SocketAddr> {
    let (tx, rx) = mpsc::channel();
    std::thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .expect("Failed to build tokio runtime");
        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                .await
                .expect("Failed to bind stub server");
            tx.send(listener.local_addr().expect("No local addr"))
                .expect("Failed to report stub address");
            axum::serve(listener, app).await.expect("Stub server failed");
        });
    });
    rx.recv().context("Stub server did not start")
}

async fn list_cards(State(state): State<StubState>) -> Json<Vec<Card>> {
    Json(state.cards.lock().unwrap().clone())
}

async fn create_card(State(state): State<StubState>, mut multipart: Multipart) -> impl IntoResponse {
    let mut upload = RecordedUpload::default();
    while let Some(field) = multipart.next_field().await.unwrap() {
        let name = field.name().unwrap_or_default().to_string();
        if name == "image" {
            upload.image_name = field.file_name().map(str::to_string);
            upload.image_len = field.bytes().await.unwrap().len();
        } else {
            let value = field.text().await.unwrap();
            upload.fields.insert(name, value);
        }
    }

    if upload.image_name.is_none() {
        return (StatusCode::BAD_REQUEST, "image required").into_response();
    }

    let id = {
        let mut next = state.next_id.lock().unwrap();
        *next += 1;
        format!("card-{}", *next)
    };
    let field = |key: &str| upload.fields.get(key).cloned().unwrap_or_default();
    let card = Card {
        id: id.clone(),
        name: field("name"),
        company: field("company"),
        title: field("title"),
        email: field("email"),
        phone: field("phone"),
        tags: parse_tags(&field("tags")),
        image_url: format!("/uploads/{id}.png"),
    };
    state.cards.lock().unwrap().insert(0, card.clone());
    state.uploads.lock().unwrap().push(upload);
    (StatusCode::CREATED, Json(card)).into_response()
}

async fn delete_card(State(state): State<StubState>, Path(id): Path<String>) -> StatusCode {
    let mut cards = state.cards.lock().unwrap();
    match cards.iter().position(|c| c.id == id) {
        Some(pos) => {
            cards.remove(pos);
            StatusCode::OK
        }
        None => StatusCode::NOT_FOUND,
    }
}

/// A small image file in its own temp dir
pub struct TestImage {
    _temp_dir: TempDir,
    pub path: PathBuf,
}

impl TestImage {
    pub fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir().context("Failed to create temporary directory")?;
        let path = temp_dir.path().join("card.png");
        std::fs::write(&path, b"\x89PNG\r\n\x1a\nfake-card-image")
            .context("Failed to write test image")?;
        Ok(Self {
            _temp_dir: temp_dir,
            path,
        })
    }
}

/// The card used by the end-to-end search scenario
pub fn ann() -> Card {
    Card {
        id: "ann-1".to_string(),
        name: "Ann".to_string(),
        company: "Acme".to_string(),
        title: "CTO".to_string(),
        email: String::new(),
        phone: String::new(),
        tags: vec!["vip".to_string()],
        image_url: "/uploads/ann-1.png".to_string(),
    }
}
