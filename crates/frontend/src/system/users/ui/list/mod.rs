use crate::shared::components::badge::{badge, BadgeTone};
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::page_header::{BreadcrumbItem, PageHeader};
use crate::shared::config::use_config;
use crate::shared::data_table::{CellValue, ColumnSpec, DataTable, SearchConfig, TableRecord};
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::list_resource::{confirm, ListResource};
use crate::shared::list_utils::{apply_query, contains_ci, ListQuery, Searchable, Sortable};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::system::users::api::fetch_users;
use contracts::enums::user_role::{UserRole, UserStatus};
use contracts::system::users::User;
use leptos::prelude::*;
use std::cmp::Ordering;

impl TableRecord for User {
    fn field_value(&self, field: &str) -> CellValue {
        match field {
            "id" => self.id.as_str().into(),
            "name" => self.name.as_str().into(),
            "email" => self.email.as_str().into(),
            "role" => self.role.display_name().into(),
            "status" => self.status.display_name().into(),
            "last_login" => self.last_login.as_deref().into(),
            _ => CellValue::Empty,
        }
    }
}

impl Searchable for User {
    fn matches_filter(&self, query: &str) -> bool {
        contains_ci(&self.name, query)
            || contains_ci(&self.email, query)
            || contains_ci(self.role.display_name(), query)
    }
}

impl Sortable for User {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            // RFC 3339 strings order chronologically; never-logged-in sorts first
            "last_login" => self.last_login.cmp(&other.last_login),
            _ => Ordering::Equal,
        }
    }
}

fn role_tone(role: UserRole) -> BadgeTone {
    match role {
        UserRole::Admin => BadgeTone::Info,
        _ => BadgeTone::Neutral,
    }
}

fn status_tone(status: UserStatus) -> BadgeTone {
    match status {
        UserStatus::Active => BadgeTone::Success,
        UserStatus::Pending => BadgeTone::Warning,
        UserStatus::Inactive => BadgeTone::Error,
    }
}

fn columns(on_delete: Callback<String>) -> Vec<ColumnSpec<User>> {
    vec![
        ColumnSpec::field("User", "name").sortable().cell(|u: &User| {
            view! {
                <div class="cell-media">
                    <div class="cell-media__icon cell-media__icon--round">{icon("users")}</div>
                    <div>
                        <div class="cell-media__title">{u.name.clone()}</div>
                        <div class="cell-media__subtitle">{u.email.clone()}</div>
                    </div>
                </div>
            }
            .into_any()
        }),
        ColumnSpec::field("Role", "role").cell(|u: &User| badge(role_tone(u.role), u.role.display_name())),
        ColumnSpec::field("Status", "status")
            .cell(|u: &User| badge(status_tone(u.status), u.status.display_name())),
        ColumnSpec::field("Last Login", "last_login").sortable().cell(|u: &User| {
            u.last_login
                .as_deref()
                .map(format_datetime)
                .unwrap_or_else(|| "Never".to_string())
                .into_any()
        }),
        ColumnSpec::rendered("Actions", move |u: &User| {
            let id = u.id.clone();
            let mailto = format!("mailto:{}", u.email);
            view! {
                <div class="cell-actions">
                    <a class="cell-actions__btn" title="Send email" href=mailto>
                        {icon("mail")}
                    </a>
                    <button
                        class="cell-actions__btn cell-actions__btn--danger"
                        title="Delete user"
                        on:click=move |_| on_delete.run(id.clone())
                    >
                        {icon("trash")}
                    </button>
                </div>
            }
            .into_any()
        }),
    ]
}

#[component]
#[allow(non_snake_case)]
pub fn UsersList() -> impl IntoView {
    let config = use_config();
    let delay_ms = config.load_delay_ms;
    let users = ListResource::load(move || fetch_users(delay_ms));
    let query = RwSignal::new(ListQuery::new(config.page_size));

    let slice = Memo::new(move |_| users.items.with(|all| query.with(|q| apply_query(all, q))));

    let on_delete = Callback::new(move |id: String| {
        if confirm("Are you sure you want to delete this user?") {
            users.remove_where(|u| u.id == id);
            let last_page = slice.with_untracked(|s| s.total_pages).max(1);
            query.update(|q| q.page = q.page.min(last_page));
        }
    });

    view! {
        <PageFrame page_id="sys_users--list" category=PAGE_CAT_SYSTEM>
            <PageHeader
                title="Users"
                description="Manage system users and their permissions"
                breadcrumb=vec![BreadcrumbItem::current("Users")]
            />

            <ErrorBanner error=users.error />

            <div class="page__content">
                <DataTable
                    data=Signal::derive(move || slice.with(|s| s.items.clone()))
                    columns=columns(on_delete)
                    key_field="id"
                    loading=users.loading
                    pagination=Signal::derive(move || slice.with(|s| s.pagination()))
                    search=SearchConfig::with_placeholder("Search users...")
                    empty_message="No users found."
                    on_event=Callback::new(move |ev| query.update(|q| q.apply_event(ev)))
                />
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data_table::{SortDirection, SortState, TableEvent};

    fn user(id: &str, name: &str, last_login: Option<&str>) -> User {
        User {
            id: id.into(),
            name: name.into(),
            email: format!("{}@example.com", name.to_lowercase()),
            role: UserRole::Customer,
            status: UserStatus::Active,
            created_at: "2023-06-01T08:00:00Z".into(),
            last_login: last_login.map(Into::into),
        }
    }

    #[test]
    fn test_sort_by_last_login() {
        let all = vec![
            user("1", "John", Some("2024-01-20T10:00:00Z")),
            user("2", "Ruwan", None),
            user("3", "Jane", Some("2024-01-19T15:30:00Z")),
        ];
        let mut query = ListQuery::new(10);
        query.apply_event(TableEvent::SortChanged(SortState::by("last_login", SortDirection::Asc)));

        let ids: Vec<_> = apply_query(&all, &query).items.into_iter().map(|u| u.id).collect();
        assert_eq!(ids, vec!["2", "3", "1"]);
    }

    #[test]
    fn test_sortable_columns() {
        let cols = columns(Callback::new(|_: String| {}));
        let keys: Vec<_> = cols.iter().filter_map(|c| c.sort_key()).collect();
        assert_eq!(keys, vec!["name", "last_login"]);
    }

    #[test]
    fn test_missing_last_login_is_empty() {
        let u = user("2", "Ruwan", None);
        assert_eq!(u.field_value("last_login"), CellValue::Empty);
    }
}
