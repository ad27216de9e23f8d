//! Tower integration for error-mapper.
//!
//! This module provides a Tower `Layer` and `Service` that run every error of
//! the wrapped service through an [`ErrorMapper`], so the service boundary
//! only ever yields caller-safe [`ErrorOutput`] values.
//!
//! # Feature Flag
//!
//! Requires the `tower` feature:
//!
//! ```toml
//! [dependencies]
//! error-mapper = { version = "0.1", features = ["tower"] }
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use error_mapper::tower::ErrorMapperLayer;
//! use error_mapper::ErrorMapperBuilder;
//! use tower::ServiceBuilder;
//!
//! let mapper = ErrorMapperBuilder::from_process_env().build();
//! let service = ServiceBuilder::new()
//!     .layer(ErrorMapperLayer::new(mapper))
//!     .service(my_service);
//! ```

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::FusedFuture;
use pin_project_lite::pin_project;
use tower::{Layer, Service};

use crate::mapper::ErrorMapper;
use crate::traits::Thrown;
use crate::types::ErrorOutput;

/// A Tower [`Layer`] that maps service errors to [`ErrorOutput`].
#[derive(Clone, Debug)]
pub struct ErrorMapperLayer {
    mapper: ErrorMapper,
}

impl ErrorMapperLayer {
    /// Creates a new `ErrorMapperLayer` using `mapper` for every error.
    #[inline]
    pub const fn new(mapper: ErrorMapper) -> Self {
        Self { mapper }
    }

    /// Returns a reference to the mapper.
    #[inline]
    pub const fn mapper(&self) -> &ErrorMapper {
        &self.mapper
    }
}

impl<S> Layer<S> for ErrorMapperLayer {
    type Service = ErrorMapperService<S>;

    #[inline]
    fn layer(&self, inner: S) -> Self::Service {
        ErrorMapperService { inner, mapper: self.mapper.clone() }
    }
}

/// A Tower [`Service`] whose errors are mapped to [`ErrorOutput`].
///
/// This is created by [`ErrorMapperLayer`] or
/// [`ServiceErrorMapExt::map_errors_with`].
#[derive(Clone, Debug)]
pub struct ErrorMapperService<S> {
    inner: S,
    mapper: ErrorMapper,
}

impl<S> ErrorMapperService<S> {
    /// Creates a new `ErrorMapperService` wrapping the given service.
    #[inline]
    pub const fn new(inner: S, mapper: ErrorMapper) -> Self {
        Self { inner, mapper }
    }

    /// Returns a reference to the inner service.
    #[inline]
    pub const fn inner(&self) -> &S {
        &self.inner
    }

    /// Returns a mutable reference to the inner service.
    #[inline]
    pub fn inner_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    /// Consumes the wrapper and returns the inner service.
    #[inline]
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S, Request> Service<Request> for ErrorMapperService<S>
where
    S: Service<Request>,
    S::Error: Thrown,
{
    type Response = S::Response;
    type Error = ErrorOutput;
    type Future = ErrorMapperFuture<S::Future>;

    #[inline]
    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        let mapper = &self.mapper;
        self.inner
            .poll_ready(cx)
            .map_err(|error| mapper.map(&error))
    }

    #[inline]
    fn call(&mut self, request: Request) -> Self::Future {
        ErrorMapperFuture::new(self.inner.call(request), self.mapper.clone())
    }
}

pin_project! {
    /// Future returned by [`ErrorMapperService`].
    ///
    /// Wraps the inner service's future and maps its error on completion.
    #[must_use = "futures do nothing unless polled"]
    pub struct ErrorMapperFuture<F> {
        #[pin]
        inner: F,
        mapper: Option<ErrorMapper>,
    }
}

impl<F> ErrorMapperFuture<F> {
    #[inline]
    fn new(inner: F, mapper: ErrorMapper) -> Self {
        Self { inner, mapper: Some(mapper) }
    }
}

impl<F, T, E> Future for ErrorMapperFuture<F>
where
    F: Future<Output = Result<T, E>>,
    E: Thrown,
{
    type Output = Result<T, ErrorOutput>;

    #[inline]
    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        match this.inner.poll(cx) {
            Poll::Ready(Ok(response)) => {
                this.mapper.take();
                Poll::Ready(Ok(response))
            },
            Poll::Ready(Err(error)) => match this.mapper.take() {
                Some(mapper) => Poll::Ready(Err(mapper.map(&error))),
                None => panic!("ErrorMapperFuture polled after completion"),
            },
            Poll::Pending => Poll::Pending,
        }
    }
}

impl<F, T, E> FusedFuture for ErrorMapperFuture<F>
where
    F: FusedFuture<Output = Result<T, E>>,
    E: Thrown,
{
    #[inline]
    fn is_terminated(&self) -> bool {
        self.mapper.is_none() || self.inner.is_terminated()
    }
}

/// Extension trait for wrapping services with an [`ErrorMapper`].
pub trait ServiceErrorMapExt<Request>: Service<Request> + Sized {
    /// Wraps this service so all of its errors are mapped by `mapper`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use error_mapper::tower::ServiceErrorMapExt;
    ///
    /// let wrapped = my_service.map_errors_with(mapper);
    /// ```
    fn map_errors_with(self, mapper: ErrorMapper) -> ErrorMapperService<Self> {
        ErrorMapperService::new(self, mapper)
    }
}

impl<S, Request> ServiceErrorMapExt<Request> for S where S: Service<Request> {}
