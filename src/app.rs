use leptos::prelude::*;
use leptos_meta::*;

use crate::components::RegisterForm;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="User Registration"/>
        <Meta name="description" content="Create an account"/>

        <main class="app">
            <RegisterForm/>
        </main>
    }
}
