use crate::model::certificate_template::CertificateTemplate;

/// Address the service serves template images from.
pub const DEFAULT_ASSET_BASE: &str = "http://localhost:8080/certificate-templates/";

/// One entry of the certificate carousel.
#[derive(Debug, Clone, PartialEq)]
pub struct CertificateOption {
    /// Template id.
    pub value: i64,
    /// Template display name.
    pub text: String,
    pub image_url: String,
}

/// Resolves template paths against a fixed asset base.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetResolver {
    base: String,
}

impl Default for AssetResolver {
    fn default() -> Self {
        Self::new(DEFAULT_ASSET_BASE)
    }
}

impl AssetResolver {
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();
        if !base.ends_with('/') {
            base.push('/');
        }
        Self { base }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Appends the final segment of `template_path` to the base.
    ///
    /// Returns `None` when the path has no file name (empty, or ending in `/`).
    pub fn image_url(&self, template_path: &str) -> Option<String> {
        let file_name = template_path.rsplit(['/', '\\']).next()?.trim();
        if file_name.is_empty() {
            return None;
        }
        Some(format!("{}{}", self.base, file_name))
    }

    pub fn option(&self, template: &CertificateTemplate) -> Option<CertificateOption> {
        Some(CertificateOption {
            value: template.id,
            text: template.name.clone(),
            image_url: self.image_url(&template.template_path)?,
        })
    }

    /// Maps the catalog to carousel options, keeping catalog order.
    ///
    /// Templates without a usable path are left out.
    pub fn options(&self, templates: &[CertificateTemplate]) -> Vec<CertificateOption> {
        templates.iter().filter_map(|t| self.option(t)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template(id: i64, path: &str) -> CertificateTemplate {
        CertificateTemplate {
            id,
            name: format!("template {id}"),
            template_path: path.to_string(),
        }
    }

    #[test]
    fn keeps_only_the_last_path_segment() {
        let resolver = AssetResolver::default();
        assert_eq!(
            resolver.image_url("/t/gold.png").as_deref(),
            Some("http://localhost:8080/certificate-templates/gold.png")
        );
        assert_eq!(
            resolver.image_url("silver.jpg").as_deref(),
            Some("http://localhost:8080/certificate-templates/silver.jpg")
        );
        assert_eq!(
            resolver.image_url(r"C:\uploads\bronze.png").as_deref(),
            Some("http://localhost:8080/certificate-templates/bronze.png")
        );
    }

    #[test]
    fn empty_paths_have_no_url() {
        let resolver = AssetResolver::default();
        assert_eq!(resolver.image_url(""), None);
        assert_eq!(resolver.image_url("templates/"), None);
    }

    #[test]
    fn base_gets_trailing_slash() {
        let resolver = AssetResolver::new("https://cdn.example/certs");
        assert_eq!(resolver.base(), "https://cdn.example/certs/");
        assert_eq!(
            resolver.image_url("a/b.png").as_deref(),
            Some("https://cdn.example/certs/b.png")
        );
    }

    #[test]
    fn options_follow_catalog_order_and_skip_pathless_templates() {
        let resolver = AssetResolver::default();
        let options = resolver.options(&[
            template(2, "x/two.png"),
            template(5, ""),
            template(1, "one.png"),
        ]);
        let ids: Vec<i64> = options.iter().map(|o| o.value).collect();
        assert_eq!(ids, vec![2, 1]);
        assert_eq!(options[0].text, "template 2");
    }
}
