use std::rc::Rc;

use yew::prelude::*;

use crate::models::order::{Order, OrderStatus, StatusFilter};
use crate::services::order_service;
use crate::utils::dialog;

/// View state behind the dashboard. The fetched list is the sole source of
/// truth for rendering until the next full reload.
#[derive(Clone, PartialEq, Default, Debug)]
pub struct OrdersState {
    pub orders: Vec<Order>,
    /// Currently expanded row, if any. Single-row expansion only.
    pub expanded: Option<String>,
    pub filter: StatusFilter,
}

pub enum OrdersAction {
    /// Initial fetch finished: replace the list wholesale.
    Loaded(Vec<Order>),
    SetFilter(StatusFilter),
    /// Selecting the already-expanded row collapses it.
    ToggleExpanded(String),
    /// Backend confirmed the patch: mirror it on the one matching record.
    StatusUpdated { id: String, status: OrderStatus },
    /// Backend confirmed the deletion: drop the one matching record.
    Removed(String),
}

impl OrdersState {
    /// Rows under the active filter, recomputed on every render.
    pub fn visible(&self) -> Vec<&Order> {
        self.orders
            .iter()
            .filter(|order| self.filter.matches(order))
            .collect()
    }

    fn apply(&mut self, action: OrdersAction) {
        match action {
            OrdersAction::Loaded(orders) => self.orders = orders,
            OrdersAction::SetFilter(filter) => self.filter = filter,
            OrdersAction::ToggleExpanded(id) => {
                self.expanded = if self.expanded.as_deref() == Some(id.as_str()) {
                    None
                } else {
                    Some(id)
                };
            }
            OrdersAction::StatusUpdated { id, status } => {
                for order in &mut self.orders {
                    if order.id == id {
                        order.status = Some(status);
                    }
                }
            }
            OrdersAction::Removed(id) => self.orders.retain(|order| order.id != id),
        }
    }
}

impl Reducible for OrdersState {
    type Action = OrdersAction;

    fn reduce(self: Rc<Self>, action: OrdersAction) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

pub struct UseOrdersHandle {
    pub state: UseReducerHandle<OrdersState>,
    pub set_filter: Callback<StatusFilter>,
    pub toggle_expanded: Callback<String>,
    pub update_status: Callback<(String, OrderStatus)>,
    pub delete_order: Callback<String>,
}

#[hook]
pub fn use_orders() -> UseOrdersHandle {
    let state = use_reducer(OrdersState::default);

    // Load all orders on mount. A failed load only hits the console; the
    // table stays empty.
    {
        let state = state.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match order_service::fetch_orders().await {
                    Ok(orders) => {
                        log::info!("📦 {} orders loaded", orders.len());
                        state.dispatch(OrdersAction::Loaded(orders));
                    }
                    Err(e) => {
                        log::error!("❌ Error fetching orders: {}", e);
                    }
                }
            });
            || ()
        });
    }

    let set_filter = {
        let state = state.clone();
        Callback::from(move |filter| state.dispatch(OrdersAction::SetFilter(filter)))
    };

    let toggle_expanded = {
        let state = state.clone();
        Callback::from(move |id| state.dispatch(OrdersAction::ToggleExpanded(id)))
    };

    // Local state is patched only after the backend confirms the write; a
    // failed call leaves the list exactly as it was.
    let update_status = {
        let state = state.clone();
        Callback::from(move |(id, status): (String, OrderStatus)| {
            let state = state.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match order_service::update_order_status(&id, status).await {
                    Ok(()) => {
                        state.dispatch(OrdersAction::StatusUpdated { id, status });
                        dialog::alert(&format!("Success! Order status updated to {}.", status));
                    }
                    Err(e) => {
                        log::error!("❌ Error updating order status: {}", e);
                        dialog::alert("Error! Something went wrong updating the order status.");
                    }
                }
            });
        })
    };

    let delete_order = {
        let state = state.clone();
        Callback::from(move |id: String| {
            if !dialog::confirm("Are you sure? You won't be able to revert this!") {
                return;
            }
            let state = state.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match order_service::delete_order(&id).await {
                    Ok(()) => {
                        state.dispatch(OrdersAction::Removed(id));
                        dialog::alert("Deleted! Order has been deleted.");
                    }
                    Err(e) => {
                        log::error!("❌ Error deleting order: {}", e);
                        dialog::alert("Error! Something went wrong deleting the order.");
                    }
                }
            });
        })
    };

    UseOrdersHandle {
        state,
        set_filter,
        toggle_expanded,
        update_status,
        delete_order,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::order::CartItem;

    fn order(id: &str, status: Option<OrderStatus>) -> Order {
        Order {
            id: id.to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: "555-0100".to_string(),
            city: "London".to_string(),
            address: "12 St James Square".to_string(),
            zip_code: "SW1Y 4JH".to_string(),
            total: 120.5,
            discount: 0.0,
            order_date: "2025-02-04T10:00:00Z".to_string(),
            status,
            cart_items: vec![CartItem {
                product_name: "Chair".to_string(),
                image: None,
            }],
        }
    }

    fn loaded_state() -> OrdersState {
        let mut state = OrdersState::default();
        state.apply(OrdersAction::Loaded(vec![
            order("a", Some(OrderStatus::Pending)),
            order("b", Some(OrderStatus::Success)),
            order("c", None),
            order("d", Some(OrderStatus::Pending)),
        ]));
        state
    }

    #[test]
    fn filtered_row_count_equals_status_count() {
        let mut state = loaded_state();

        for status in OrderStatus::ALL {
            state.apply(OrdersAction::SetFilter(StatusFilter::Only(status)));
            let expected = state
                .orders
                .iter()
                .filter(|o| o.status == Some(status))
                .count();
            assert_eq!(state.visible().len(), expected);
        }

        state.apply(OrdersAction::SetFilter(StatusFilter::All));
        assert_eq!(state.visible().len(), state.orders.len());
    }

    #[test]
    fn toggling_expansion_twice_restores_state() {
        let mut state = loaded_state();
        let before = state.expanded.clone();

        state.apply(OrdersAction::ToggleExpanded("b".to_string()));
        assert_eq!(state.expanded.as_deref(), Some("b"));

        state.apply(OrdersAction::ToggleExpanded("b".to_string()));
        assert_eq!(state.expanded, before);
    }

    #[test]
    fn expanding_another_row_replaces_the_previous_one() {
        let mut state = loaded_state();
        state.apply(OrdersAction::ToggleExpanded("a".to_string()));
        state.apply(OrdersAction::ToggleExpanded("b".to_string()));
        assert_eq!(state.expanded.as_deref(), Some("b"));
    }

    #[test]
    fn status_update_touches_only_the_matching_order() {
        let mut state = loaded_state();
        let before = state.orders.clone();

        state.apply(OrdersAction::StatusUpdated {
            id: "a".to_string(),
            status: OrderStatus::Success,
        });

        for (prev, now) in before.iter().zip(&state.orders) {
            if now.id == "a" {
                assert_eq!(now.status, Some(OrderStatus::Success));
                // Every other field of the updated record is untouched.
                let mut reverted = now.clone();
                reverted.status = prev.status;
                assert_eq!(&reverted, prev);
            } else {
                assert_eq!(now, prev);
            }
        }
    }

    #[test]
    fn unconfirmed_update_leaves_state_untouched() {
        // The hook dispatches only after the backend confirms; a confirmation
        // that matches nothing must be a no-op.
        let mut state = loaded_state();
        let before = state.clone();

        state.apply(OrdersAction::StatusUpdated {
            id: "missing".to_string(),
            status: OrderStatus::Dispatch,
        });

        assert_eq!(state, before);
    }

    #[test]
    fn removal_drops_exactly_one_record_under_any_filter() {
        for filter in StatusFilter::OPTIONS {
            let mut state = loaded_state();
            state.apply(OrdersAction::SetFilter(filter));
            let len_before = state.orders.len();

            state.apply(OrdersAction::Removed("d".to_string()));

            assert_eq!(state.orders.len(), len_before - 1);
            assert!(state.orders.iter().all(|o| o.id != "d"));
            assert!(state.visible().iter().all(|o| o.id != "d"));
        }
    }

    #[test]
    fn updated_order_appears_under_its_new_filter() {
        let mut state = loaded_state();
        state.apply(OrdersAction::SetFilter(StatusFilter::Only(OrderStatus::Success)));

        let visible: Vec<_> = state.visible().iter().map(|o| o.id.clone()).collect();
        assert_eq!(visible, vec!["b"]);

        state.apply(OrdersAction::StatusUpdated {
            id: "a".to_string(),
            status: OrderStatus::Success,
        });

        let visible: Vec<_> = state.visible().iter().map(|o| o.id.clone()).collect();
        assert_eq!(visible, vec!["a", "b"]);
    }
}
