//! Page sources for each Journal list endpoint

use std::sync::Arc;

use async_trait::async_trait;

use super::loader::{FeedLabels, PageSource};
use crate::client::models::{Booking, Organization, Service, Specialist, SpecialistService};
use crate::client::{ListingApi, PaginationParams};
use crate::error::Result;

macro_rules! page_source {
    (
        $(#[$doc:meta])*
        $name:ident, item = $item:ty, scope = $scope:ty, labels = $labels:expr,
        |$client:ident, $scope_var:ident, $params:ident| $fetch:expr
    ) => {
        $(#[$doc])*
        pub struct $name<C: ?Sized> {
            client: Arc<C>,
        }

        impl<C: ?Sized> $name<C> {
            pub fn new(client: Arc<C>) -> Self {
                Self { client }
            }
        }

        #[async_trait]
        impl<C: ListingApi + ?Sized + 'static> PageSource for $name<C> {
            type Item = $item;
            type Scope = $scope;

            fn labels(&self) -> FeedLabels {
                $labels
            }

            async fn fetch_page(
                &self,
                $scope_var: &Self::Scope,
                $params: &PaginationParams,
            ) -> Result<Vec<Self::Item>> {
                let $client = &self.client;
                $fetch.await
            }
        }
    };
}

page_source!(
    /// Public organization directory
    OrganizationFeed, item = Organization, scope = (),
    labels = FeedLabels {
        failure: "Failed to load organizations",
        empty: "No organizations yet",
        exhausted: "No more organizations",
    },
    |client, _scope, params| client.list_organizations(params)
);

page_source!(
    /// Services of one organization (scope: organization id)
    ServiceFeed, item = Service, scope = String,
    labels = FeedLabels {
        failure: "Failed to load services",
        empty: "This organization has no services yet",
        exhausted: "No more services",
    },
    |client, org_id, params| client.list_services(org_id, params)
);

page_source!(
    /// Services performed by one specialist (scope: specialist id)
    SpecialistServiceFeed, item = SpecialistService, scope = String,
    labels = FeedLabels {
        failure: "Failed to load specialist services",
        empty: "This specialist has no services yet",
        exhausted: "No more services",
    },
    |client, specialist_id, params| client.list_specialist_services(specialist_id, params)
);

page_source!(
    /// Specialists of one organization (scope: organization id)
    SpecialistFeed, item = Specialist, scope = String,
    labels = FeedLabels {
        failure: "Failed to load specialists",
        empty: "This organization has no specialists yet",
        exhausted: "No more specialists",
    },
    |client, org_id, params| client.list_specialists(org_id, params)
);

page_source!(
    /// Bookings of the signed-in user
    BookingFeed, item = Booking, scope = (),
    labels = FeedLabels {
        failure: "Failed to load bookings",
        empty: "You have no bookings yet",
        exhausted: "No more bookings",
    },
    |client, _scope, params| client.list_bookings(params)
);

page_source!(
    /// Appointments booked with one organization (scope: organization id)
    AppointmentFeed, item = Booking, scope = String,
    labels = FeedLabels {
        failure: "Failed to load appointments",
        empty: "No appointments yet",
        exhausted: "No more appointments",
    },
    |client, org_id, params| client.list_appointments(org_id, params)
);
