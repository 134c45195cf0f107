use yew::prelude::*;

use crate::components::order_row::OrderRow;
use crate::components::protected::ProtectedRoute;
use crate::hooks::use_orders::use_orders;
use crate::models::order::StatusFilter;

#[function_component(AdminDashboard)]
pub fn admin_dashboard() -> Html {
    let orders = use_orders();
    let state = orders.state.clone();

    let filter_buttons = StatusFilter::OPTIONS.iter().map(|option| {
        let class = if state.filter == *option {
            "px-4 py-2 rounded-lg transition-all border bg-white text-red-600 font-bold border-red-600"
        } else {
            "px-4 py-2 rounded-lg transition-all border text-gray-700 border-transparent hover:border-gray-400"
        };
        let onclick = {
            let set_filter = orders.set_filter.clone();
            let option = *option;
            Callback::from(move |_: MouseEvent| set_filter.emit(option))
        };

        html! {
            <button key={option.label()} {class} {onclick}>{ option.label() }</button>
        }
    });

    let rows = state.visible().into_iter().map(|order| {
        let expanded = state.expanded.as_deref() == Some(order.id.as_str());
        html! {
            <OrderRow
                key={order.id.clone()}
                order={order.clone()}
                {expanded}
                on_toggle={orders.toggle_expanded.clone()}
                on_status_change={orders.update_status.clone()}
                on_delete={orders.delete_order.clone()}
            />
        }
    });

    html! {
        <ProtectedRoute>
            <div class="p-6 bg-gray-100 min-h-screen">
                <nav class="flex justify-between items-center bg-white p-4 rounded-lg shadow-md mb-6">
                    <h2 class="text-2xl font-bold text-gray-700">{"Admin Dashboard"}</h2>
                    <div class="flex space-x-4">{ for filter_buttons }</div>
                </nav>

                <div class="overflow-x-auto bg-white p-4 rounded-lg shadow-md">
                    <h2 class="text-xl font-semibold text-gray-800 mb-4">{"Orders"}</h2>
                    <table class="min-w-full table-auto">
                        <thead>
                            <tr class="bg-gray-200 text-left">
                                <th class="px-6 py-3 text-sm font-semibold text-gray-600">{"ID"}</th>
                                <th class="px-6 py-3 text-sm font-semibold text-gray-600">{"Customer"}</th>
                                <th class="px-6 py-3 text-sm font-semibold text-gray-600">{"Address"}</th>
                                <th class="px-6 py-3 text-sm font-semibold text-gray-600">{"Date"}</th>
                                <th class="px-6 py-3 text-sm font-semibold text-gray-600">{"Total"}</th>
                                <th class="px-6 py-3 text-sm font-semibold text-gray-600">{"Status"}</th>
                                <th class="px-6 py-3 text-sm font-semibold text-gray-600">{"Action"}</th>
                            </tr>
                        </thead>
                        <tbody>{ for rows }</tbody>
                    </table>
                </div>
            </div>
        </ProtectedRoute>
    }
}
