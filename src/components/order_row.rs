use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::models::order::{Order, OrderStatus};
use crate::utils::format::format_order_date;
use crate::utils::image::image_url;

#[derive(Properties, PartialEq)]
pub struct OrderRowProps {
    pub order: Order,
    #[prop_or(false)]
    pub expanded: bool,
    pub on_toggle: Callback<String>,
    pub on_status_change: Callback<(String, OrderStatus)>,
    pub on_delete: Callback<String>,
}

/// One table row, plus its expanded-details row when selected.
#[function_component(OrderRow)]
pub fn order_row(props: &OrderRowProps) -> Html {
    let order = &props.order;

    let on_row_click = {
        let on_toggle = props.on_toggle.clone();
        let id = order.id.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(id.clone()))
    };

    let on_select_change = {
        let on_status_change = props.on_status_change.clone();
        let id = order.id.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(status) = select.value().parse::<OrderStatus>() {
                on_status_change.emit((id.clone(), status));
            }
        })
    };

    let on_delete_click = {
        let on_delete = props.on_delete.clone();
        let id = order.id.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_delete.emit(id.clone());
        })
    };

    let status_options = OrderStatus::ALL.iter().map(|status| {
        let selected = order.status == Some(*status);
        html! {
            <option value={status.as_str()} {selected}>{ status.label() }</option>
        }
    });

    let details = props.expanded.then(|| {
        let items = order.cart_items.iter().map(|item| {
            let image = item
                .image
                .as_deref()
                .and_then(image_url)
                .map(|src| {
                    html! {
                        <img
                            {src}
                            alt={item.product_name.clone()}
                            width="50"
                            height="50"
                            class="rounded"
                        />
                    }
                })
                .unwrap_or_default();

            html! {
                <li class="flex items-center space-x-2">
                    <span>{ &item.product_name }</span>
                    { image }
                </li>
            }
        });

        html! {
            <tr class="bg-gray-50">
                <td colspan="7" class="px-6 py-4">
                    <h3 class="text-lg font-semibold text-gray-700 mb-2">{"Order Details"}</h3>
                    <p class="text-sm text-gray-700">{"Phone: "}<strong>{ &order.phone }</strong></p>
                    <p class="text-sm text-gray-700">{"Email: "}<strong>{ &order.email }</strong></p>
                    <p class="text-sm text-gray-700">{"City: "}<strong>{ &order.city }</strong></p>
                    <ul class="mt-2 space-y-2">{ for items }</ul>
                </td>
            </tr>
        }
    });

    html! {
        <>
            <tr class="border-t hover:bg-gray-50 cursor-pointer" onclick={on_row_click}>
                <td class="px-6 py-4 text-sm text-gray-800">{ &order.id }</td>
                <td class="px-6 py-4 text-sm text-gray-800">{ order.customer_name() }</td>
                <td class="px-6 py-4 text-sm text-gray-800">{ &order.address }</td>
                <td class="px-6 py-4 text-sm text-gray-800">{ format_order_date(&order.order_date) }</td>
                <td class="px-6 py-4 text-sm text-gray-800">{ format!("${}", order.total) }</td>
                <td class="px-6 py-4 text-sm">
                    <select onchange={on_select_change} class="p-2 border rounded-lg">
                        { for status_options }
                    </select>
                </td>
                <td class="px-6 py-4 text-sm">
                    <button
                        onclick={on_delete_click}
                        class="text-red-600 hover:text-red-800 font-semibold"
                    >
                        {"Delete"}
                    </button>
                </td>
            </tr>
            { details.unwrap_or_default() }
        </>
    }
}
