//! In-memory API fakes for controller tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;

use bookdesk_client::api::{AuthApi, BookApi, EmailApi, QuotationApi};
use bookdesk_client::dto::response::{BookPage, LoginResponse};
use bookdesk_core::error::AppError;
use bookdesk_core::result::AppResult;
use bookdesk_core::types::{
    BookId, CustomerId, EmailId, PageRequest, PaginationData, PricingId, QuotationId, UserId,
};
use bookdesk_entity::book::{Book, BookFilters, BookStatistics, BookStatus, Pricing};
use bookdesk_entity::email::EmailMessage;
use bookdesk_entity::quotation::{CustomerRef, Quotation, QuotationStatus};
use bookdesk_entity::user::{User, UserRole};

pub fn at(minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 9, minute, 0)
        .single()
        .expect("valid timestamp")
}

pub fn book(n: usize) -> Book {
    Book {
        id: BookId::new(format!("bk-{n}")),
        title: format!("Title {n}"),
        author: format!("Author {}", n % 3),
        year: Some(2000 + n as i32),
        publisher: None,
        isbn: None,
        classification: None,
        price: Some(Decimal::new(1999, 2)),
        status: BookStatus::Active,
        pricing: None,
        created_at: None,
        updated_at: None,
    }
}

pub fn quotation(id: &str, minute: u32, status: QuotationStatus, total: i64) -> Quotation {
    Quotation {
        id: QuotationId::new(id),
        customer: CustomerRef {
            id: CustomerId::new("c1"),
            name: "City Library".to_string(),
            email: None,
        },
        subtotal: Decimal::from(total),
        discount: Decimal::ZERO,
        total: Decimal::from(total),
        status,
        valid_until: None,
        created_at: at(minute),
        email: None,
    }
}

pub fn email(id: &str, minute: u32, from: &str, subject: &str, read: bool) -> EmailMessage {
    EmailMessage {
        id: EmailId::new(id),
        from: from.to_string(),
        to: vec!["sales@bookdesk.test".to_string()],
        subject: subject.to_string(),
        snippet: String::new(),
        received_at: at(minute),
        read,
        quotation_id: None,
    }
}

pub fn user(role: UserRole) -> User {
    User {
        id: UserId::new("u1"),
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        role,
    }
}

/// Book catalog held in memory with per-page delays and injectable failures.
#[derive(Default)]
pub struct FakeBookApi {
    books: Mutex<Vec<Book>>,
    list_requests: Mutex<Vec<(PageRequest, BookFilters)>>,
    delays: Mutex<HashMap<u64, Duration>>,
    list_failure: Mutex<Option<AppError>>,
    detail_failure: Mutex<Option<AppError>>,
    deleted: Mutex<Vec<BookId>>,
    pricing: Mutex<Vec<Pricing>>,
}

impl FakeBookApi {
    pub fn with_books(count: usize) -> Self {
        let api = Self::default();
        *api.books.lock().expect("lock") = (1..=count).map(book).collect();
        api
    }

    pub fn delay_page(&self, page: u64, delay: Duration) {
        self.delays.lock().expect("lock").insert(page, delay);
    }

    pub fn fail_next_list(&self, err: AppError) {
        *self.list_failure.lock().expect("lock") = Some(err);
    }

    pub fn fail_next_detail(&self, err: AppError) {
        *self.detail_failure.lock().expect("lock") = Some(err);
    }

    pub fn set_pricing(&self, rates: &[(i64, u32)]) {
        *self.pricing.lock().expect("lock") = rates
            .iter()
            .enumerate()
            .map(|(i, (rate, minute))| Pricing {
                id: PricingId::new(format!("pr-{i}")),
                rate: Decimal::from(*rate),
                discount: Decimal::ZERO,
                source: Some("publisher".to_string()),
                currency: "USD".to_string(),
                created_at: at(*minute),
            })
            .collect();
    }

    pub fn list_calls(&self) -> usize {
        self.list_requests.lock().expect("lock").len()
    }

    pub fn last_list(&self) -> Option<(PageRequest, BookFilters)> {
        self.list_requests.lock().expect("lock").last().cloned()
    }

    pub fn deleted(&self) -> Vec<BookId> {
        self.deleted.lock().expect("lock").clone()
    }

    pub fn book_status(&self, id: &BookId) -> Option<BookStatus> {
        self.books
            .lock()
            .expect("lock")
            .iter()
            .find(|b| &b.id == id)
            .map(|b| b.status)
    }

    fn matches(book: &Book, filters: &BookFilters) -> bool {
        let contains = |field: &str, needle: &Option<String>| {
            needle
                .as_deref()
                .is_none_or(|n| n.is_empty() || field.contains(n))
        };
        contains(&book.title, &filters.title) && contains(&book.author, &filters.author)
    }

    fn take_detail_failure(&self) -> AppResult<()> {
        match self.detail_failure.lock().expect("lock").take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl BookApi for FakeBookApi {
    async fn list_books(&self, page: PageRequest, filters: &BookFilters) -> AppResult<BookPage> {
        self.list_requests
            .lock()
            .expect("lock")
            .push((page, filters.clone()));

        let delay = self.delays.lock().expect("lock").get(&page.page).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(err) = self.list_failure.lock().expect("lock").take() {
            return Err(err);
        }

        let matching: Vec<Book> = self
            .books
            .lock()
            .expect("lock")
            .iter()
            .filter(|b| Self::matches(b, filters))
            .cloned()
            .collect();
        let start = ((page.page - 1) * page.limit) as usize;
        let books: Vec<Book> = matching
            .iter()
            .skip(start)
            .take(page.limit as usize)
            .cloned()
            .collect();
        let pagination = PaginationData::from_server(
            page.page,
            page.limit,
            matching.len() as u64,
            None,
            books.len() as u64,
        );
        Ok(BookPage { books, pagination })
    }

    async fn get_book(&self, id: &BookId) -> AppResult<Book> {
        self.take_detail_failure()?;
        self.books
            .lock()
            .expect("lock")
            .iter()
            .find(|b| &b.id == id)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("Book {id} not found")))
    }

    async fn get_pricing_history(&self, _id: &BookId) -> AppResult<Vec<Pricing>> {
        Ok(self.pricing.lock().expect("lock").clone())
    }

    async fn get_book_statistics(&self, _id: &BookId) -> AppResult<BookStatistics> {
        Ok(BookStatistics {
            total_quotations: 4,
            total_quantity: 37,
            last_quoted_at: Some(at(30)),
        })
    }

    async fn mark_out_of_print(&self, id: &BookId) -> AppResult<()> {
        let mut books = self.books.lock().expect("lock");
        let book = books
            .iter_mut()
            .find(|b| &b.id == id)
            .ok_or_else(|| AppError::not_found(format!("Book {id} not found")))?;
        book.status = BookStatus::OutOfPrint;
        Ok(())
    }

    async fn delete_books(&self, ids: &[BookId]) -> AppResult<u64> {
        let mut books = self.books.lock().expect("lock");
        let before = books.len();
        books.retain(|b| !ids.contains(&b.id));
        self.deleted.lock().expect("lock").extend_from_slice(ids);
        Ok((before - books.len()) as u64)
    }
}

/// Quotations and inbox held in memory.
#[derive(Default)]
pub struct FakeSalesApi {
    pub quotations: Mutex<Vec<Quotation>>,
    pub emails: Mutex<Vec<EmailMessage>>,
    pub failure: Mutex<Option<AppError>>,
}

impl FakeSalesApi {
    fn take_failure(&self) -> AppResult<()> {
        match self.failure.lock().expect("lock").take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl QuotationApi for FakeSalesApi {
    async fn list_quotations(&self) -> AppResult<Vec<Quotation>> {
        self.take_failure()?;
        Ok(self.quotations.lock().expect("lock").clone())
    }
}

#[async_trait]
impl EmailApi for FakeSalesApi {
    async fn list_emails(&self) -> AppResult<Vec<EmailMessage>> {
        self.take_failure()?;
        Ok(self.emails.lock().expect("lock").clone())
    }
}

/// Auth backend accepting one password and one reset token.
pub struct FakeAuthApi {
    pub role: UserRole,
    pub password: String,
    pub reset_token: String,
    pub reset_requests: Mutex<Vec<String>>,
    pub new_password: Mutex<Option<String>>,
    pub token: Mutex<Option<String>>,
}

impl FakeAuthApi {
    pub fn new(role: UserRole) -> Self {
        Self {
            role,
            password: "Correct-Horse1".to_string(),
            reset_token: "tok-valid-123".to_string(),
            reset_requests: Mutex::new(Vec::new()),
            new_password: Mutex::new(None),
            token: Mutex::new(None),
        }
    }
}

#[async_trait]
impl AuthApi for FakeAuthApi {
    async fn login(&self, email: &str, password: &str) -> AppResult<LoginResponse> {
        if password != self.password {
            return Err(AppError::authentication("Invalid email or password"));
        }
        let mut user = user(self.role);
        user.email = email.to_string();
        *self.token.lock().expect("lock") = Some("jwt-fake".to_string());
        Ok(LoginResponse {
            token: "jwt-fake".to_string(),
            user,
        })
    }

    fn session_token(&self) -> Option<String> {
        self.token.lock().expect("lock").clone()
    }

    async fn current_user(&self) -> AppResult<User> {
        Ok(user(self.role))
    }

    async fn request_password_reset(&self, email: &str) -> AppResult<()> {
        self.reset_requests
            .lock()
            .expect("lock")
            .push(email.to_string());
        Ok(())
    }

    async fn reset_password(&self, token: &str, password: &str) -> AppResult<()> {
        if token != self.reset_token {
            return Err(AppError::validation("Reset token is invalid or has expired"));
        }
        *self.new_password.lock().expect("lock") = Some(password.to_string());
        Ok(())
    }
}
