// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use kisan_domain::{NewUser, User, UserProfile};

use crate::collection::Collection;
use crate::gateway::{
    GatewayError, MarketplaceGateway, decode, field_patch, insert_row, to_row, update_record,
};
use crate::query::{Select, single};

impl MarketplaceGateway {
    /// Registers a user. Credentials on the sign-up form are never stored.
    ///
    /// Soft contract: returns `None` if the user could not be stored. A
    /// user whose role and profile disagree is refused before the insert.
    #[must_use]
    pub fn add_user(&self, user: &NewUser) -> Option<User> {
        self.soft("add_user", |store| {
            let row = to_row(user)?;
            decode::<User>(row.clone())?;
            insert_row(store, row)
        })
    }

    /// Replaces the profile of user `user_id`, taking the profile's role as
    /// the user's role.
    ///
    /// A user with no role yet gains the profile's role. A user holding a
    /// different role is left untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if no store is configured, the user does not
    /// exist, or the profile does not belong to the user's role.
    pub fn update_user_profile(
        &self,
        user_id: &str,
        profile: &UserProfile,
    ) -> Result<User, GatewayError> {
        self.hard("update_user_profile", |store| {
            let current = store.select(&Select::all(Collection::Users).eq("id", user_id))?;
            let mut user: User = decode(single(Collection::Users, current)?)?;
            user.set_profile(profile.clone())?;

            let mut patch = field_patch("role", &user.role)?;
            patch.extend(field_patch("profile", profile)?);
            update_record(store, user_id, patch)
        })
    }
}
