//! Keyed cache of query results, shared with every view through a context
//! provider. Reads subscribe to their key; writes land values or stale-out
//! prefixes, and subscribers are woken to pick up the change.

use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use yew::prelude::*;

pub mod key;
pub use key::QueryKey;

use crate::response::ApiError;

#[derive(Debug, Clone)]
enum EntryState {
	/// A fetch is in flight; identical reads wait on it instead of firing
	/// their own request.
	Fetching,
	Fresh,
	/// Invalidated; the previous value is kept for display while the next
	/// read re-fetches.
	Stale,
	/// The last fetch failed. Kept on the entry so subscribers surface the
	/// error instead of re-fetching in a loop; cleared by invalidation.
	Failed(ApiError),
}

struct Entry {
	state: EntryState,
	value: Option<Rc<dyn Any>>,
}

#[derive(Default)]
struct Inner {
	entries: HashMap<QueryKey, Entry>,
	listeners: HashMap<QueryKey, Vec<(usize, Callback<()>)>>,
	next_listener: usize,
}

/// What a read finds under its key.
pub enum Lookup<T> {
	Missing,
	Fetching,
	Fresh(Rc<T>),
	Stale(Option<Rc<T>>),
	Failed(ApiError),
}

#[derive(Clone, Default)]
pub struct QueryCache(Rc<RefCell<Inner>>);
impl PartialEq for QueryCache {
	fn eq(&self, other: &Self) -> bool {
		Rc::ptr_eq(&self.0, &other.0)
	}
}

fn downcast<T: 'static>(value: Rc<dyn Any>) -> Option<Rc<T>> {
	value.downcast::<T>().ok()
}

impl QueryCache {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn lookup<T: 'static>(&self, key: &QueryKey) -> Lookup<T> {
		let inner = self.0.borrow();
		let Some(entry) = inner.entries.get(key) else {
			return Lookup::Missing;
		};
		match &entry.state {
			EntryState::Fetching => Lookup::Fetching,
			EntryState::Fresh => match entry.value.clone().and_then(downcast::<T>) {
				Some(value) => Lookup::Fresh(value),
				None => Lookup::Missing,
			},
			EntryState::Stale => Lookup::Stale(entry.value.clone().and_then(downcast::<T>)),
			EntryState::Failed(error) => Lookup::Failed(error.clone()),
		}
	}

	/// Claim the key for a fetch. Returns false when an identical read is
	/// already in flight, in which case the caller just stays subscribed.
	pub fn begin_fetch(&self, key: &QueryKey) -> bool {
		let mut inner = self.0.borrow_mut();
		match inner.entries.get_mut(key) {
			Some(entry) if matches!(entry.state, EntryState::Fetching) => false,
			Some(entry) => {
				entry.state = EntryState::Fetching;
				true
			}
			None => {
				inner.entries.insert(
					key.clone(),
					Entry {
						state: EntryState::Fetching,
						value: None,
					},
				);
				true
			}
		}
	}

	/// Land a fetched value. Two racing writes to the same key resolve to
	/// whichever lands last.
	pub fn insert<T: 'static>(&self, key: QueryKey, value: Rc<T>) {
		self.store(key, value as Rc<dyn Any>);
	}

	/// Write a value that arrived outside a fetch (a mutation response that
	/// already carries the new state).
	pub fn store(&self, key: QueryKey, value: Rc<dyn Any>) {
		{
			let mut inner = self.0.borrow_mut();
			inner.entries.insert(
				key.clone(),
				Entry {
					state: EntryState::Fresh,
					value: Some(value),
				},
			);
		}
		self.notify(&key);
	}

	pub fn fail(&self, key: &QueryKey, error: ApiError) {
		{
			let mut inner = self.0.borrow_mut();
			match inner.entries.get_mut(key) {
				Some(entry) => entry.state = EntryState::Failed(error),
				None => {
					inner.entries.insert(
						key.clone(),
						Entry {
							state: EntryState::Failed(error),
							value: None,
						},
					);
				}
			}
		}
		self.notify(key);
	}

	/// Mark every entry whose key starts with `prefix` stale and wake its
	/// subscribers so they re-fetch.
	pub fn invalidate(&self, prefix: &QueryKey) {
		let touched = {
			let mut inner = self.0.borrow_mut();
			let mut touched = Vec::new();
			for (key, entry) in inner.entries.iter_mut() {
				if key.starts_with(prefix) {
					entry.state = EntryState::Stale;
					touched.push(key.clone());
				}
			}
			touched
		};
		log::debug!("invalidated {} cache entries under {prefix:?}", touched.len());
		for key in &touched {
			self.notify(key);
		}
	}

	/// Drop everything. Used on sign-out so the next account never sees the
	/// previous account's data.
	pub fn clear(&self) {
		let keys = {
			let mut inner = self.0.borrow_mut();
			inner.entries.clear();
			inner.listeners.keys().cloned().collect::<Vec<_>>()
		};
		for key in &keys {
			self.notify(key);
		}
	}

	pub fn subscribe(&self, key: QueryKey, callback: Callback<()>) -> Subscription {
		let id = {
			let mut inner = self.0.borrow_mut();
			let id = inner.next_listener;
			inner.next_listener += 1;
			inner.listeners.entry(key.clone()).or_default().push((id, callback));
			id
		};
		Subscription {
			cache: self.clone(),
			key,
			id,
		}
	}

	fn unsubscribe(&self, key: &QueryKey, id: usize) {
		let mut inner = self.0.borrow_mut();
		if let Some(listeners) = inner.listeners.get_mut(key) {
			listeners.retain(|(listener_id, _)| *listener_id != id);
			if listeners.is_empty() {
				inner.listeners.remove(key);
			}
		}
	}

	fn notify(&self, key: &QueryKey) {
		// Emitting re-enters the cache from hook effects; the borrow must be
		// released first.
		let callbacks = {
			let inner = self.0.borrow();
			match inner.listeners.get(key) {
				Some(listeners) => listeners.iter().map(|(_, cb)| cb.clone()).collect::<Vec<_>>(),
				None => Vec::new(),
			}
		};
		for callback in callbacks {
			callback.emit(());
		}
	}
}

/// Removes its listener when dropped, so a response arriving after the
/// subscribing view unmounted lands in the cache and wakes no one.
pub struct Subscription {
	cache: QueryCache,
	key: QueryKey,
	id: usize,
}
impl Drop for Subscription {
	fn drop(&mut self) {
		self.cache.unsubscribe(&self.key, self.id);
	}
}

#[function_component]
pub fn Provider(props: &yew::html::ChildrenProps) -> Html {
	let cache = use_memo((), |_| QueryCache::new());
	html! {
		<ContextProvider<QueryCache> context={(*cache).clone()}>
			{props.children.clone()}
		</ContextProvider<QueryCache>>
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::cache::key::{self as qk, FoodFilter};
	use std::cell::Cell;

	fn counter() -> (Rc<Cell<u32>>, Callback<()>) {
		let count = Rc::new(Cell::new(0));
		let callback = {
			let count = count.clone();
			Callback::from(move |_| count.set(count.get() + 1))
		};
		(count, callback)
	}

	#[test]
	fn fresh_values_come_back_typed() {
		let cache = QueryCache::new();
		cache.insert(qk::weights(), Rc::new(vec![1u32, 2, 3]));
		match cache.lookup::<Vec<u32>>(&qk::weights()) {
			Lookup::Fresh(value) => assert_eq!(*value, vec![1, 2, 3]),
			_ => panic!("expected fresh value"),
		}
	}

	#[test]
	fn invalidating_foods_prefix_hits_lists_and_by_id_only() {
		let cache = QueryCache::new();
		let list_key = qk::foods(&FoodFilter::new(Some("x"), Some("y")));
		cache.insert(list_key.clone(), Rc::new(vec!["apple".to_owned()]));
		cache.insert(qk::food("123"), Rc::new("apple".to_owned()));
		cache.insert(qk::daily("2024-01-01"), Rc::new("logs".to_owned()));

		cache.invalidate(&qk::all_foods());

		assert!(matches!(cache.lookup::<Vec<String>>(&list_key), Lookup::Stale(Some(_))));
		assert!(matches!(cache.lookup::<String>(&qk::food("123")), Lookup::Stale(_)));
		assert!(matches!(
			cache.lookup::<String>(&qk::daily("2024-01-01")),
			Lookup::Fresh(_)
		));
	}

	#[test]
	fn invalidating_one_date_leaves_other_dates_untouched() {
		let cache = QueryCache::new();
		cache.insert(qk::daily("2024-03-05"), Rc::new(5u32));
		cache.insert(qk::daily("2024-03-06"), Rc::new(6u32));

		cache.invalidate(&qk::daily("2024-03-05"));

		assert!(matches!(cache.lookup::<u32>(&qk::daily("2024-03-05")), Lookup::Stale(_)));
		assert!(matches!(cache.lookup::<u32>(&qk::daily("2024-03-06")), Lookup::Fresh(_)));
	}

	#[test]
	fn identical_in_flight_reads_deduplicate() {
		let cache = QueryCache::new();
		assert!(cache.begin_fetch(&qk::weights()));
		assert!(!cache.begin_fetch(&qk::weights()));
		// A distinct key is unaffected.
		assert!(cache.begin_fetch(&qk::weight_latest()));
	}

	#[test]
	fn failed_entries_report_the_error_and_do_not_refetch() {
		let cache = QueryCache::new();
		assert!(cache.begin_fetch(&qk::profile()));
		cache.fail(
			&qk::profile(),
			ApiError::Api {
				message: "boom".into(),
				errors: Vec::new(),
			},
		);
		match cache.lookup::<u32>(&qk::profile()) {
			Lookup::Failed(error) => assert_eq!(error.message_or("fallback"), "boom"),
			_ => panic!("expected failed entry"),
		}
		// Invalidation clears the failure and allows a fresh claim.
		cache.invalidate(&qk::profile());
		assert!(cache.begin_fetch(&qk::profile()));
	}

	#[test]
	fn subscribers_wake_on_insert_and_invalidate_until_dropped() {
		let cache = QueryCache::new();
		let (count, callback) = counter();
		let subscription = cache.subscribe(qk::weights(), callback);

		cache.insert(qk::weights(), Rc::new(1u32));
		assert_eq!(count.get(), 1);
		cache.invalidate(&qk::all_weight());
		assert_eq!(count.get(), 2);
		// Prefix invalidation with no matching entries wakes no one.
		cache.invalidate(&qk::all_foods());
		assert_eq!(count.get(), 2);

		drop(subscription);
		cache.insert(qk::weights(), Rc::new(2u32));
		assert_eq!(count.get(), 2);
	}

	#[test]
	fn a_late_write_after_unsubscribe_is_inert_but_cached() {
		let cache = QueryCache::new();
		let (count, callback) = counter();
		drop(cache.subscribe(qk::daily("2024-06-01"), callback));

		cache.insert(qk::daily("2024-06-01"), Rc::new(42u32));
		assert_eq!(count.get(), 0);
		assert!(matches!(
			cache.lookup::<u32>(&qk::daily("2024-06-01")),
			Lookup::Fresh(_)
		));
	}
}
