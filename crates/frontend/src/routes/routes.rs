use crate::domain::a003_filial::ui::{FilialDetails, FilialList};
use crate::domain::a004_special_project::ui::{SpecialProjectDetails, SpecialProjectList};
use crate::domain::a005_additional_services::ui::AdditionalServicesPage;
use crate::layout::Shell;
use crate::system::pages::{home::HomePage, not_found::NotFound};
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/filials") view=FilialList />
                    <Route path=path!("/filials/:id") view=FilialDetails />
                    <Route path=path!("/specialProjects") view=SpecialProjectList />
                    <Route path=path!("/specialProjects/:id") view=SpecialProjectDetails />
                    <Route path=path!("/additionalServices") view=AdditionalServicesPage />
                </Routes>
            </Shell>
        </Router>
    }
}
