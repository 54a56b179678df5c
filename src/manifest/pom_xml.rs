//! pom.xml extractor for the backend section
//!
//! Handles the indirection layers a Maven build descriptor adds on top of
//! plain name→version pairs:
//! - `${...}` property placeholders resolved against the properties block
//! - the Spring Boot starter parent, which stands in for `spring-boot` and
//!   drags `spring-framework` along via the mapping tables
//! - the `java.version` property
//! - parent-managed versions for the Liquibase starter pair
//!
//! Element names are matched by local name, so descriptors with or without
//! the Maven namespace declaration both extract.

use crate::dataset::EolDataset;
use crate::domain::ResolvedDependency;
use crate::error::ManifestError;
use crate::manifest::ManifestExtractor;
use crate::mappings::{
    lookup_by_prefix, DEFAULT_LIQUIBASE_VERSION, DEFAULT_SPRING_FRAMEWORK_VERSION,
    SPRING_BOOT_TO_FRAMEWORK, SPRING_BOOT_TO_LIQUIBASE,
};
use roxmltree::{Document, Node};
use std::collections::HashMap;
use std::path::PathBuf;

const STARTER_PARENT_ARTIFACT: &str = "spring-boot-starter-parent";
const SPRING_BOOT_KEY: &str = "spring-boot";
const SPRING_FRAMEWORK_KEY: &str = "spring-framework";
const SPRING_FRAMEWORK_PROPERTY: &str = "spring-oxm.version";
const JAVA_VERSION_PROPERTY: &str = "java.version";
const JAVA_KEY: &str = "java";
const LIQUIBASE_ARTIFACT: &str = "liquibase-core";
const LIQUIBASE_GROUP: &str = "org.liquibase";
const LIQUIBASE_KEY: &str = "liquibase";

/// Extractor for pom.xml files
pub struct PomXmlExtractor;

impl ManifestExtractor for PomXmlExtractor {
    fn extract(
        &self,
        content: &str,
        dataset: &EolDataset,
    ) -> Result<Vec<ResolvedDependency>, ManifestError> {
        let doc = Document::parse(content)
            .map_err(|e| ManifestError::xml(PathBuf::from("pom.xml"), e.to_string()))?;
        let root = doc.root_element();

        let properties = collect_properties(root);
        let parent = find_descendant(root, "parent");
        let parent_raw_version = parent.and_then(|p| child_text(p, "version"));

        let mut resolved = Vec::new();

        // Parent descriptor
        if let Some(parent) = parent {
            let group = child_text(parent, "groupId");
            let artifact = child_text(parent, "artifactId");
            let version = child_text(parent, "version");
            if let (Some(_), Some(artifact), Some(version)) = (group, artifact, version) {
                let name = artifact.to_lowercase();
                if name == STARTER_PARENT_ARTIFACT {
                    resolved.push(ResolvedDependency::list(
                        SPRING_BOOT_KEY,
                        version,
                        dataset.supported_versions(SPRING_BOOT_KEY),
                    ));
                    // Spring Framework rides along with Boot: mapping table
                    // first, then the spring-oxm.version property, then the
                    // fixed default.
                    let framework_version = lookup_by_prefix(SPRING_BOOT_TO_FRAMEWORK, version)
                        .map(str::to_string)
                        .or_else(|| {
                            properties
                                .get(SPRING_FRAMEWORK_PROPERTY)
                                .map(|v| v.trim().to_string())
                        })
                        .unwrap_or_else(|| DEFAULT_SPRING_FRAMEWORK_VERSION.to_string());
                    resolved.push(ResolvedDependency::list(
                        SPRING_FRAMEWORK_KEY,
                        framework_version,
                        dataset.supported_versions(SPRING_FRAMEWORK_KEY),
                    ));
                } else {
                    resolved.push(ResolvedDependency::unchecked(name, version));
                }
            }
        }

        // Language version
        if let Some(java_version) = properties.get(JAVA_VERSION_PROPERTY) {
            resolved.push(ResolvedDependency::list(
                JAVA_KEY,
                java_version.as_str(),
                dataset.supported_versions(JAVA_KEY),
            ));
        }

        // Dependency nodes
        for dep in root
            .descendants()
            .filter(|n| n.is_element() && n.tag_name().name() == "dependency")
        {
            let Some(artifact) = child_text(dep, "artifactId") else {
                continue;
            };
            let name = artifact.to_lowercase();
            let group = child_text(dep, "groupId")
                .map(|g| g.to_lowercase())
                .unwrap_or_default();

            match child_text(dep, "version") {
                Some(raw) => {
                    let version = resolve_placeholder(raw, &properties);
                    if dataset.contains(&name) {
                        let supported = dataset.supported_versions(&name);
                        resolved.push(ResolvedDependency::list(name, version, supported));
                    } else {
                        resolved.push(ResolvedDependency::unchecked(name, version));
                    }
                }
                None => {
                    // Version managed by the parent descriptor. Only the
                    // Liquibase starter pair resolves through its mapping
                    // table; every other managed dependency is dropped
                    // here.
                    if name == LIQUIBASE_ARTIFACT && group == LIQUIBASE_GROUP {
                        let version = parent_raw_version
                            .and_then(|v| lookup_by_prefix(SPRING_BOOT_TO_LIQUIBASE, v))
                            .unwrap_or(DEFAULT_LIQUIBASE_VERSION);
                        resolved.push(ResolvedDependency::list(
                            LIQUIBASE_KEY,
                            version,
                            dataset.supported_versions(LIQUIBASE_KEY),
                        ));
                    }
                }
            }
        }

        Ok(resolved)
    }

    fn section(&self) -> &'static str {
        "Backend"
    }
}

/// Resolve a `${name}` placeholder against the collected properties.
/// Unresolvable placeholders keep their raw text; classification then falls
/// back to string comparison downstream.
fn resolve_placeholder(raw: &str, properties: &HashMap<String, String>) -> String {
    let trimmed = raw.trim();
    if let Some(inner) = trimmed.strip_prefix("${").and_then(|s| s.strip_suffix('}')) {
        if let Some(value) = properties.get(inner) {
            return value.trim().to_string();
        }
    }
    raw.to_string()
}

/// Collect all text-valued leaf children of the properties block
fn collect_properties(root: Node) -> HashMap<String, String> {
    let mut properties = HashMap::new();
    if let Some(block) = find_descendant(root, "properties") {
        for property in block.children().filter(|n| n.is_element()) {
            if let Some(value) = property.text() {
                properties.insert(property.tag_name().name().to_string(), value.to_string());
            }
        }
    }
    properties
}

fn find_descendant<'a, 'input>(root: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    root.descendants()
        .find(|n| n.is_element() && n.tag_name().name() == name)
}

fn child_elem<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|n| n.is_element() && n.tag_name().name() == name)
}

fn child_text<'a>(node: Node<'a, '_>, name: &str) -> Option<&'a str> {
    child_elem(node, name).and_then(|n| n.text())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Resolution;

    fn dataset() -> EolDataset {
        EolDataset::from_json(
            r#"{
                "spring-boot": {
                    "result": {
                        "releases": [
                            {"name": "3.5", "isEol": false},
                            {"name": "3.4", "isEol": false},
                            {"name": "3.3", "isEol": true}
                        ]
                    }
                },
                "spring-framework": {
                    "result": {
                        "releases": [
                            {"name": "6.3", "isEol": false},
                            {"name": "6.2", "isEol": false},
                            {"name": "6.1", "isEol": true}
                        ]
                    }
                },
                "java": {
                    "result": {
                        "releases": [
                            {"name": "21", "isEol": false},
                            {"name": "17", "isEol": false}
                        ]
                    }
                },
                "liquibase": {
                    "result": {
                        "releases": [
                            {"name": "4.33", "isEol": false},
                            {"name": "4.32", "isEol": true}
                        ]
                    }
                },
                "tomcat": {
                    "result": {
                        "releases": [
                            {"name": "11", "isEol": false},
                            {"name": "10.1", "isEol": false}
                        ]
                    }
                }
            }"#,
        )
        .unwrap()
    }

    fn extract(content: &str) -> Vec<ResolvedDependency> {
        PomXmlExtractor.extract(content, &dataset()).unwrap()
    }

    fn find<'a>(deps: &'a [ResolvedDependency], name: &str) -> &'a ResolvedDependency {
        deps.iter()
            .find(|d| d.name == name)
            .unwrap_or_else(|| panic!("no dependency named {}", name))
    }

    const STARTER_POM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0">
    <parent>
        <groupId>org.springframework.boot</groupId>
        <artifactId>spring-boot-starter-parent</artifactId>
        <version>3.2.1</version>
    </parent>
    <properties>
        <java.version>21</java.version>
        <tomcat.version> 10.1.18 </tomcat.version>
    </properties>
    <dependencies>
        <dependency>
            <groupId>org.apache.tomcat</groupId>
            <artifactId>Tomcat</artifactId>
            <version>${tomcat.version}</version>
        </dependency>
        <dependency>
            <groupId>org.liquibase</groupId>
            <artifactId>liquibase-core</artifactId>
        </dependency>
        <dependency>
            <groupId>com.example</groupId>
            <artifactId>internal-commons</artifactId>
            <version>2.0.0</version>
        </dependency>
    </dependencies>
</project>"#;

    #[test]
    fn test_starter_parent_records_spring_boot() {
        let deps = extract(STARTER_POM);
        let boot = find(&deps, "spring-boot");
        match &boot.resolution {
            Resolution::List { used, supported } => {
                assert_eq!(used, "3.2.1");
                assert_eq!(supported, &["3.5".to_string(), "3.4".to_string()]);
            }
            other => panic!("unexpected resolution: {:?}", other),
        }
    }

    #[test]
    fn test_starter_parent_drags_spring_framework_via_mapping() {
        let deps = extract(STARTER_POM);
        let framework = find(&deps, "spring-framework");
        assert_eq!(framework.used(), "6.1");
    }

    #[test]
    fn test_java_version_property() {
        let deps = extract(STARTER_POM);
        let java = find(&deps, "java");
        match &java.resolution {
            Resolution::List { used, supported } => {
                assert_eq!(used, "21");
                assert_eq!(supported.len(), 2);
            }
            other => panic!("unexpected resolution: {:?}", other),
        }
    }

    #[test]
    fn test_placeholder_resolves_and_trims() {
        let deps = extract(STARTER_POM);
        let tomcat = find(&deps, "tomcat");
        assert_eq!(tomcat.used(), "10.1.18");
        assert!(matches!(tomcat.resolution, Resolution::List { .. }));
    }

    #[test]
    fn test_managed_liquibase_resolves_via_mapping() {
        let deps = extract(STARTER_POM);
        let liquibase = find(&deps, "liquibase");
        assert_eq!(liquibase.used(), "4.23.0");
    }

    #[test]
    fn test_unknown_explicit_dependency_is_unchecked() {
        let deps = extract(STARTER_POM);
        let commons = find(&deps, "internal-commons");
        assert!(matches!(commons.resolution, Resolution::Unchecked { .. }));
        assert_eq!(commons.used(), "2.0.0");
    }

    #[test]
    fn test_artifact_names_are_lowercased() {
        let deps = extract(STARTER_POM);
        assert!(deps.iter().any(|d| d.name == "tomcat"));
        assert!(!deps.iter().any(|d| d.name == "Tomcat"));
    }

    #[test]
    fn test_unresolved_placeholder_keeps_raw_text() {
        let pom = r#"<project>
            <dependencies>
                <dependency>
                    <groupId>com.example</groupId>
                    <artifactId>app-lib</artifactId>
                    <version>${app.version}</version>
                </dependency>
            </dependencies>
        </project>"#;
        let deps = extract(pom);
        assert_eq!(deps[0].used(), "${app.version}");
    }

    #[test]
    fn test_non_starter_parent_is_unchecked() {
        let pom = r#"<project>
            <parent>
                <groupId>com.example</groupId>
                <artifactId>Company-Parent</artifactId>
                <version>7.1.0</version>
            </parent>
        </project>"#;
        let deps = extract(pom);
        assert_eq!(deps.len(), 1);
        assert_eq!(deps[0].name, "company-parent");
        assert!(matches!(deps[0].resolution, Resolution::Unchecked { .. }));
        assert_eq!(deps[0].used(), "7.1.0");
    }

    #[test]
    fn test_parent_missing_version_is_skipped() {
        let pom = r#"<project>
            <parent>
                <groupId>com.example</groupId>
                <artifactId>parent</artifactId>
            </parent>
        </project>"#;
        assert!(extract(pom).is_empty());
    }

    #[test]
    fn test_managed_dependency_without_special_case_is_dropped() {
        let pom = r#"<project>
            <dependencies>
                <dependency>
                    <groupId>org.springframework.boot</groupId>
                    <artifactId>spring-boot-starter-web</artifactId>
                </dependency>
            </dependencies>
        </project>"#;
        assert!(extract(pom).is_empty());
    }

    #[test]
    fn test_liquibase_requires_exact_group() {
        let pom = r#"<project>
            <dependencies>
                <dependency>
                    <groupId>com.example</groupId>
                    <artifactId>liquibase-core</artifactId>
                </dependency>
            </dependencies>
        </project>"#;
        assert!(extract(pom).is_empty());
    }

    #[test]
    fn test_liquibase_without_parent_uses_default() {
        let pom = r#"<project>
            <dependencies>
                <dependency>
                    <groupId>org.liquibase</groupId>
                    <artifactId>liquibase-core</artifactId>
                </dependency>
            </dependencies>
        </project>"#;
        let deps = extract(pom);
        assert_eq!(deps[0].name, "liquibase");
        assert_eq!(deps[0].used(), "4.26.0");
    }

    #[test]
    fn test_liquibase_with_unmapped_parent_uses_default() {
        let pom = r#"<project>
            <parent>
                <groupId>org.springframework.boot</groupId>
                <artifactId>spring-boot-starter-parent</artifactId>
                <version>2.7.18</version>
            </parent>
            <dependencies>
                <dependency>
                    <groupId>org.liquibase</groupId>
                    <artifactId>liquibase-core</artifactId>
                </dependency>
            </dependencies>
        </project>"#;
        let deps = extract(pom);
        let liquibase = find(&deps, "liquibase");
        assert_eq!(liquibase.used(), "4.26.0");
    }

    #[test]
    fn test_dependency_without_artifact_is_skipped() {
        let pom = r#"<project>
            <dependencies>
                <dependency>
                    <groupId>com.example</groupId>
                    <version>1.0.0</version>
                </dependency>
            </dependencies>
        </project>"#;
        assert!(extract(pom).is_empty());
    }

    #[test]
    fn test_framework_falls_back_to_property() {
        // Boot version outside every mapping line; the spring-oxm property
        // takes over.
        let pom = r#"<project>
            <parent>
                <groupId>org.springframework.boot</groupId>
                <artifactId>spring-boot-starter-parent</artifactId>
                <version>4.0.0</version>
            </parent>
            <properties>
                <spring-oxm.version> 6.2.1 </spring-oxm.version>
            </properties>
        </project>"#;
        let deps = extract(pom);
        let framework = find(&deps, "spring-framework");
        assert_eq!(framework.used(), "6.2.1");
    }

    #[test]
    fn test_framework_falls_back_to_default() {
        let pom = r#"<project>
            <parent>
                <groupId>org.springframework.boot</groupId>
                <artifactId>spring-boot-starter-parent</artifactId>
                <version>4.0.0</version>
            </parent>
        </project>"#;
        let deps = extract(pom);
        let framework = find(&deps, "spring-framework");
        assert_eq!(framework.used(), "6.2.5");
    }

    #[test]
    fn test_invalid_xml_is_an_error() {
        let err = PomXmlExtractor
            .extract("<project><unclosed>", &dataset())
            .unwrap_err();
        assert!(matches!(err, ManifestError::Xml { .. }));
    }

    #[test]
    fn test_resolve_placeholder_helper() {
        let mut properties = HashMap::new();
        properties.insert("x".to_string(), " 1.2.3 ".to_string());

        assert_eq!(resolve_placeholder("${x}", &properties), "1.2.3");
        assert_eq!(resolve_placeholder("${missing}", &properties), "${missing}");
        assert_eq!(resolve_placeholder("1.0.0", &properties), "1.0.0");
        // Surrounding whitespace around the placeholder itself is tolerated.
        assert_eq!(resolve_placeholder(" ${x} ", &properties), "1.2.3");
    }
}
