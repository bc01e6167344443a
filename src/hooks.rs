//! Generic read/write halves of the query layer. Reads are cached by key,
//! deduplicated while in flight, and re-run when their key is invalidated.
//! Writes fire once per invocation and declare their cache side effects.

use std::any::Any;
use std::rc::Rc;

use futures_util::future::LocalBoxFuture;
use yew::prelude::*;

use crate::cache::{Lookup, QueryCache, QueryKey};
use crate::response::ApiError;

/// Render-facing status of a keyed read.
#[derive(Debug)]
pub enum QueryStatus<T> {
	/// Constructed but gated off (`enabled == false`).
	Empty,
	/// In flight; carries the last known value while re-fetching.
	Pending(Option<Rc<T>>),
	Success(Rc<T>),
	Failed(ApiError),
}
impl<T> QueryStatus<T> {
	pub fn data(&self) -> Option<&T> {
		match self {
			Self::Success(value) | Self::Pending(Some(value)) => Some(value.as_ref()),
			_ => None,
		}
	}

	pub fn is_loading(&self) -> bool {
		matches!(self, Self::Pending(_))
	}

	pub fn error(&self) -> Option<&ApiError> {
		match self {
			Self::Failed(error) => Some(error),
			_ => None,
		}
	}
}

pub struct UseQueryHandle<T> {
	status: QueryStatus<T>,
	cache: QueryCache,
	key: QueryKey,
}
impl<T> UseQueryHandle<T> {
	pub fn status(&self) -> &QueryStatus<T> {
		&self.status
	}

	pub fn data(&self) -> Option<&T> {
		self.status.data()
	}

	pub fn is_loading(&self) -> bool {
		self.status.is_loading()
	}

	pub fn error(&self) -> Option<&ApiError> {
		self.status.error()
	}

	/// Manual refresh, packaged for event handlers: stales out this key so
	/// every subscriber re-fetches.
	pub fn refetcher(&self) -> Callback<()> {
		let cache = self.cache.clone();
		let key = self.key.clone();
		Callback::from(move |_| cache.invalidate(&key))
	}
}

struct Revision(u32);
impl Reducible for Revision {
	type Action = ();

	fn reduce(self: Rc<Self>, _action: ()) -> Rc<Self> {
		Rc::new(Self(self.0 + 1))
	}
}

/// A cached read. `fetch` is only invoked when the entry is absent or
/// stale, and only by one subscriber at a time; everyone else picks the
/// result up through their subscription.
#[hook]
pub fn use_query<T, F>(key: QueryKey, enabled: bool, fetch: F) -> UseQueryHandle<T>
where
	T: 'static,
	F: Fn() -> LocalBoxFuture<'static, Result<T, ApiError>> + 'static,
{
	let cache = use_context::<QueryCache>().expect("query cache context is not provided");
	let revision = use_reducer(|| Revision(0));

	{
		let dispatcher = revision.dispatcher();
		let cache = cache.clone();
		use_effect_with(key.clone(), move |key| {
			let subscription = cache.subscribe(
				key.clone(),
				Callback::from(move |_| dispatcher.dispatch(())),
			);
			move || drop(subscription)
		});
	}

	{
		let cache = cache.clone();
		use_effect_with(
			(key.clone(), enabled, revision.0),
			move |(key, enabled, _revision)| {
				if !enabled {
					return;
				}
				let wants_fetch = matches!(
					cache.lookup::<T>(key),
					Lookup::Missing | Lookup::Stale(_)
				);
				if wants_fetch && cache.begin_fetch(key) {
					let key = key.clone();
					wasm_bindgen_futures::spawn_local(async move {
						match fetch().await {
							Ok(value) => cache.insert(key, Rc::new(value)),
							Err(error) => {
								log::debug!("query {key:?} failed: {error}");
								cache.fail(&key, error);
							}
						}
					});
				}
			},
		);
	}

	let status = if !enabled {
		QueryStatus::Empty
	} else {
		match cache.lookup::<T>(&key) {
			// The fetch effect fires right after this render.
			Lookup::Missing | Lookup::Fetching => QueryStatus::Pending(None),
			Lookup::Stale(previous) => QueryStatus::Pending(previous),
			Lookup::Fresh(value) => QueryStatus::Success(value),
			Lookup::Failed(error) => QueryStatus::Failed(error),
		}
	};
	UseQueryHandle { status, cache, key }
}

/// A cache side effect a successful write declares.
pub enum Effect {
	/// Stale-out every key sharing this prefix.
	Invalidate(QueryKey),
	/// Write a response value straight into an entry, no re-fetch needed.
	SetQueryData(QueryKey, Rc<dyn Any>),
}

impl QueryCache {
	pub fn apply(&self, effect: Effect) {
		match effect {
			Effect::Invalidate(prefix) => self.invalidate(&prefix),
			Effect::SetQueryData(key, value) => self.store(key, value),
		}
	}
}

#[derive(Debug)]
pub enum MutationStatus<T> {
	Idle,
	Pending,
	Success(Rc<T>),
	Failed(ApiError),
}
impl<T> Clone for MutationStatus<T> {
	fn clone(&self) -> Self {
		match self {
			Self::Idle => Self::Idle,
			Self::Pending => Self::Pending,
			Self::Success(value) => Self::Success(value.clone()),
			Self::Failed(error) => Self::Failed(error.clone()),
		}
	}
}

pub struct UseMutationHandle<I, T> {
	status: MutationStatus<T>,
	run: Rc<dyn Fn(I)>,
}
impl<I, T> Clone for UseMutationHandle<I, T> {
	fn clone(&self) -> Self {
		Self {
			status: self.status.clone(),
			run: self.run.clone(),
		}
	}
}
impl<I, T> UseMutationHandle<I, T> {
	pub fn run(&self, input: I) {
		(*self.run)(input);
	}

	pub fn status(&self) -> &MutationStatus<T> {
		&self.status
	}

	pub fn is_pending(&self) -> bool {
		matches!(self.status, MutationStatus::Pending)
	}

	pub fn data(&self) -> Option<&T> {
		match &self.status {
			MutationStatus::Success(value) => Some(value.as_ref()),
			_ => None,
		}
	}

	pub fn error(&self) -> Option<&ApiError> {
		match &self.status {
			MutationStatus::Failed(error) => Some(error),
			_ => None,
		}
	}
}

/// A write. On success the declared effects are applied to the cache in
/// order; on failure the cache is left untouched and the error is surfaced
/// through the handle.
#[hook]
pub fn use_mutation<I, T, M, E>(mutate: M, effects: E) -> UseMutationHandle<I, T>
where
	I: Clone + 'static,
	T: 'static,
	M: Fn(I) -> LocalBoxFuture<'static, Result<T, ApiError>> + 'static,
	E: Fn(&T, &I) -> Vec<Effect> + 'static,
{
	let cache = use_context::<QueryCache>().expect("query cache context is not provided");
	let state = use_state(|| MutationStatus::<T>::Idle);

	let run = {
		let state = state.clone();
		let mutate = Rc::new(mutate);
		let effects = Rc::new(effects);
		Rc::new(move |input: I| {
			state.set(MutationStatus::Pending);
			let state = state.clone();
			let cache = cache.clone();
			let mutate = mutate.clone();
			let effects = effects.clone();
			wasm_bindgen_futures::spawn_local(async move {
				match (*mutate)(input.clone()).await {
					Ok(value) => {
						for effect in (*effects)(&value, &input) {
							cache.apply(effect);
						}
						state.set(MutationStatus::Success(Rc::new(value)));
					}
					Err(error) => {
						log::debug!("mutation failed: {error}");
						state.set(MutationStatus::Failed(error));
					}
				}
			});
		}) as Rc<dyn Fn(I)>
	};

	UseMutationHandle {
		status: (*state).clone(),
		run,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::cache::key::{self as qk, FoodFilter};
	use crate::data::User;

	#[test]
	fn set_query_data_lands_a_fresh_typed_entry() {
		let cache = QueryCache::new();
		let user = User::with_default_goals("u1".into(), "a@b.c".into(), "A".into());
		cache.apply(Effect::SetQueryData(
			qk::profile(),
			Rc::new(Some(user)) as Rc<dyn Any>,
		));
		match cache.lookup::<Option<User>>(&qk::profile()) {
			Lookup::Fresh(found) => {
				let name = found.as_ref().as_ref().map(|user| user.name.as_str());
				assert_eq!(name, Some("A"));
			}
			_ => panic!("expected fresh profile"),
		}
	}

	#[test]
	fn a_log_write_only_stales_its_own_date() {
		let cache = QueryCache::new();
		cache.insert(qk::daily("2024-03-05"), Rc::new(1u32));
		cache.insert(qk::daily("2024-03-06"), Rc::new(2u32));
		cache.insert(qk::foods(&FoodFilter::default()), Rc::new(3u32));

		cache.apply(Effect::Invalidate(qk::daily("2024-03-05")));

		assert!(matches!(
			cache.lookup::<u32>(&qk::daily("2024-03-05")),
			Lookup::Stale(_)
		));
		assert!(matches!(
			cache.lookup::<u32>(&qk::daily("2024-03-06")),
			Lookup::Fresh(_)
		));
		assert!(matches!(
			cache.lookup::<u32>(&qk::foods(&FoodFilter::default())),
			Lookup::Fresh(_)
		));
	}

	#[test]
	fn a_food_write_stales_every_foods_view_in_one_effect() {
		let cache = QueryCache::new();
		cache.insert(qk::foods(&FoodFilter::new(Some("apple"), None)), Rc::new(1u32));
		cache.insert(qk::food("f1"), Rc::new(2u32));
		cache.insert(qk::weights(), Rc::new(3u32));

		cache.apply(Effect::Invalidate(qk::all_foods()));

		assert!(matches!(
			cache.lookup::<u32>(&qk::foods(&FoodFilter::new(Some("apple"), None))),
			Lookup::Stale(_)
		));
		assert!(matches!(cache.lookup::<u32>(&qk::food("f1")), Lookup::Stale(_)));
		assert!(matches!(cache.lookup::<u32>(&qk::weights()), Lookup::Fresh(_)));
	}
}
