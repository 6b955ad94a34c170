use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::auth_guard::AdminAuthGuard;
use crate::content;
use crate::utils::auth::clear_admin_token;

#[component]
pub fn AdminDashboard() -> impl IntoView {
    view! {
        <AdminAuthGuard>
            <AdminPanel/>
        </AdminAuthGuard>
    }
}

#[component]
fn AdminPanel() -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <div class="admin-dashboard">
            <div class="admin-dashboard-header">
                <h1>"Admin Dashboard"</h1>
                <p>"Rooms currently listed on the site"</p>
                <button
                    type="button"
                    class="admin-logout"
                    on:click=move |_| {
                        clear_admin_token();
                        navigate("/admin/login", Default::default());
                    }
                >
                    "Sign out"
                </button>
            </div>

            <table class="admin-room-table">
                <thead>
                    <tr>
                        <th>"Room"</th>
                        <th>"Rate"</th>
                        <th>"Guests"</th>
                    </tr>
                </thead>
                <tbody>
                    {content::rooms()
                        .into_iter()
                        .map(|room| {
                            view! {
                                <tr>
                                    <td>{room.name}</td>
                                    <td>{format!("€{}", room.nightly_rate)}</td>
                                    <td>{room.max_guests}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}
