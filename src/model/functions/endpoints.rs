use crate::model::types::Error;
use url::Url;

/// Absolute urls of the three routes the page talks to, rooted at the page origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: Url,
}

impl Endpoints {
    pub fn new(origin: &str) -> Result<Self, Error> {
        let base = Url::parse(origin)?;
        if base.cannot_be_a_base() {
            return Err(Error::InvalidUrl(origin.to_string()));
        }
        Ok(Self { base })
    }

    pub fn activities(&self) -> Result<Url, Error> {
        self.build(&["activities"], None)
    }

    pub fn signup(&self, activity: &str, email: &str) -> Result<Url, Error> {
        self.build(&["activities", activity, "signup"], Some(email))
    }

    pub fn participant(&self, activity: &str, email: &str) -> Result<Url, Error> {
        self.build(&["activities", activity, "participant"], Some(email))
    }

    fn build(&self, segments: &[&str], email: Option<&str>) -> Result<Url, Error> {
        let mut url = self.base.clone();
        url.set_fragment(None);
        url.set_query(None);
        url.path_segments_mut()
            .map_err(|_| Error::InvalidUrl(self.base.to_string()))?
            .clear()
            .extend(segments);
        if let Some(email) = email {
            url.query_pairs_mut().append_pair("email", email);
        }
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoints() -> Endpoints {
        Endpoints::new("http://localhost:3000").unwrap()
    }

    #[test]
    fn activities_list() {
        assert_eq!(
            endpoints().activities().unwrap().as_str(),
            "http://localhost:3000/activities"
        );
    }

    #[test]
    fn signup_encodes_name_and_email() {
        assert_eq!(
            endpoints()
                .signup("Chess Club", "jane.doe@mergington.edu")
                .unwrap()
                .as_str(),
            "http://localhost:3000/activities/Chess%20Club/signup?email=jane.doe%40mergington.edu"
        );
    }

    #[test]
    fn participant_escapes_slashes_and_plus() {
        assert_eq!(
            endpoints()
                .participant("Art/Craft", "a+b@x.com")
                .unwrap()
                .as_str(),
            "http://localhost:3000/activities/Art%2FCraft/participant?email=a%2Bb%40x.com"
        );
    }

    #[test]
    fn origin_path_is_replaced() {
        let endpoints = Endpoints::new("https://school.example/some/page?x=1#top").unwrap();
        assert_eq!(
            endpoints.activities().unwrap().as_str(),
            "https://school.example/activities"
        );
    }

    #[test]
    fn rejects_unusable_origin() {
        assert!(matches!(
            Endpoints::new("mailto:someone@example.com"),
            Err(Error::InvalidUrl(_))
        ));
        assert!(matches!(Endpoints::new("null"), Err(Error::InvalidUrl(_))));
    }
}
