//! Main Leptos App component with SPA router

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::components::{Header, LoadingProvider, ToastProvider};
use crate::pages::{Clients, Dashboard, Planner, Vehicles};

/// Main App component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <ToastProvider>
            <LoadingProvider>
                <Router>
                    <div class="app">
                        <Header />
                        <main class="content">
                            <Routes fallback=|| "Página no encontrada">
                                <Route path=path!("/") view=Dashboard />
                                <Route path=path!("/clientes") view=Clients />
                                <Route path=path!("/vehiculos") view=Vehicles />
                                <Route path=path!("/planificador") view=Planner />
                            </Routes>
                        </main>
                    </div>
                </Router>
            </LoadingProvider>
        </ToastProvider>
    }
}
