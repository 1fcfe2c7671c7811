use dioxus::prelude::*;

use crate::app::layouts::Navbar;
use crate::app::pages::{OrderDetail, OrderList, PageNotFound};
use crate::domain::models::OrderId;
use crate::shared::logging;

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/orders")]
        OrderList {},
        // `order_id` reaches the page as a prop
        #[route("/orders/:order_id")]
        OrderDetail { order_id: OrderId },
    #[end_layout]

    #[redirect("/", || Route::OrderList {})]
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

/// Static description of one binding in the route table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub component: Option<&'static str>,
    pub name: Option<&'static str>,
    /// Path parameters are passed to the component as props
    pub props: bool,
    pub redirect: Option<&'static str>,
}

pub const ROUTE_TABLE: &[RouteEntry] = &[
    RouteEntry {
        path: "/",
        component: None,
        name: None,
        props: false,
        redirect: Some("/orders"),
    },
    RouteEntry {
        path: "/orders",
        component: Some("OrderList"),
        name: None,
        props: false,
        redirect: None,
    },
    RouteEntry {
        path: "/orders/:order_id",
        component: Some("OrderDetail"),
        name: Some("CargoDetail"),
        props: true,
        redirect: None,
    },
    RouteEntry {
        path: "/:..segments",
        component: Some("PageNotFound"),
        name: Some("NotFound"),
        props: true,
        redirect: None,
    },
];

impl Route {
    /// Resolve a path to the route that renders it. Redirects are followed and
    /// unmatched paths land on [`Route::PageNotFound`].
    pub fn resolve(path: &str) -> Route {
        // The browser treats an empty path as the root
        let path = if path.is_empty() { "/" } else { path };

        let route = path.parse::<Route>().unwrap_or_else(|e| {
            tracing::debug!(path = path, error = %e, "Route parse failed");
            Route::PageNotFound {
                segments: path
                    .split('/')
                    .filter(|segment| !segment.is_empty())
                    .map(String::from)
                    .collect(),
            }
        });

        match &route {
            Route::PageNotFound { .. } => logging::log_route_not_found(path),
            _ => logging::log_route_resolved(path, route.component_name()),
        }
        route
    }

    pub fn component_name(&self) -> &'static str {
        match self {
            Route::OrderList {} => "OrderList",
            Route::OrderDetail { .. } => "OrderDetail",
            Route::PageNotFound { .. } => "PageNotFound",
        }
    }

    /// Named routes, as listed in [`ROUTE_TABLE`]
    pub fn name(&self) -> Option<&'static str> {
        self.entry().and_then(|entry| entry.name)
    }

    pub fn entry(&self) -> Option<&'static RouteEntry> {
        let component = self.component_name();
        ROUTE_TABLE
            .iter()
            .find(|entry| entry.component == Some(component))
    }
}

#[component]
pub fn App() -> Element {
    use_effect(|| {
        tracing::info!("Cargo orders app initialized");
    });

    rsx! {
        Router::<Route> {}
    }
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "c-layout",
            Navbar {}
            main { class: "c-layout__main",
                Outlet::<Route> {}
            }
        }
    }
}
