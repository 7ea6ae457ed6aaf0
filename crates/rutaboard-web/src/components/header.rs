//! Header component

use leptos::prelude::*;
use leptos_router::components::A;

/// Header with logo and top navigation
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <div class="header-content">
                <h1 class="logo">
                    <i class="fa-solid fa-route"></i>
                    " RutaBoard"
                </h1>
                <p class="subtitle">"Planificador de rutas de reparto - Lima"</p>
            </div>
            <nav class="header-nav">
                <A href="/">"Panel"</A>
                <A href="/clientes">"Clientes"</A>
                <A href="/vehiculos">"Vehículos"</A>
                <A href="/planificador">"Planificador"</A>
            </nav>
        </header>
    }
}
