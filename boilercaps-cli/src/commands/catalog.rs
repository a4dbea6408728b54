use std::fmt;

use super::templates::Template;
use super::toolchain::Tool;

/// What the user wants generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Frontend,
    Backend,
    FullStack,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Frontend, Category::Backend, Category::FullStack];

    pub fn label(self) -> &'static str {
        match self {
            Category::Frontend => "frontend",
            Category::Backend => "backend",
            Category::FullStack => "full stack",
        }
    }

    pub fn includes_frontend(self) -> bool {
        matches!(self, Category::Frontend | Category::FullStack)
    }

    pub fn includes_backend(self) -> bool {
        matches!(self, Category::Backend | Category::FullStack)
    }
}

/// A kind of project with its own generator and dependency table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectType {
    React,
    ReactNative,
    Expo,
    Next,
    Backend,
}

impl ProjectType {
    /// Frontend variants in the order they are offered.
    pub const FRONTEND: [ProjectType; 4] = [
        ProjectType::React,
        ProjectType::ReactNative,
        ProjectType::Expo,
        ProjectType::Next,
    ];

    pub const ALL: [ProjectType; 5] = [
        ProjectType::React,
        ProjectType::ReactNative,
        ProjectType::Expo,
        ProjectType::Next,
        ProjectType::Backend,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProjectType::React => "react",
            ProjectType::ReactNative => "react-native",
            ProjectType::Expo => "expo",
            ProjectType::Next => "next",
            ProjectType::Backend => "backend",
        }
    }

    pub fn is_frontend(self) -> bool {
        !matches!(self, ProjectType::Backend)
    }

    /// Executable that creates the initial project tree.
    pub fn generator_tool(self) -> Tool {
        match self {
            ProjectType::React => Tool::named("create-react-app"),
            ProjectType::ReactNative => Tool::named("create-react-native-app"),
            ProjectType::Expo => Tool::named("create-expo-app"),
            ProjectType::Next => Tool::named("create-next-app"),
            ProjectType::Backend => Tool {
                command: "express",
                package: "express-generator",
            },
        }
    }

    pub fn default_name(self) -> &'static str {
        if self.is_frontend() {
            "my-boilercaps-app"
        } else {
            "my-boilercaps-backend"
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Side effect that follows a successful install of its dependency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostInstall {
    /// Write `.env` with an empty connection string.
    EnvFile,
    /// Write `models/connection.js`.
    ConnectionStub,
}

impl PostInstall {
    pub fn template(self) -> Template {
        match self {
            PostInstall::EnvFile => Template::EnvFile,
            PostInstall::ConnectionStub => Template::ConnectionStub,
        }
    }
}

/// One optional package offered for a project type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dependency {
    pub name: &'static str,
    pub post_install: Option<PostInstall>,
}

const fn dep(name: &'static str) -> Dependency {
    Dependency {
        name,
        post_install: None,
    }
}

const fn dep_then(name: &'static str, action: PostInstall) -> Dependency {
    Dependency {
        name,
        post_install: Some(action),
    }
}

const WEB: &[Dependency] = &[
    dep("@fortawesome/fontawesome-svg-core"),
    dep("@fortawesome/free-solid-svg-icons"),
    dep("@fortawesome/react-fontawesome"),
    dep("@reduxjs/toolkit"),
    dep("antd"),
    dep("formik"),
    dep("moment"),
    dep("react-moment"),
    dep("react-router-dom"),
    dep("styled-components"),
    dep("socket.io-client"),
    dep("uuid"),
];

const REACT_NATIVE: &[Dependency] = &[
    dep("@fortawesome/fontawesome-svg-core"),
    dep("@fortawesome/free-solid-svg-icons"),
    dep("@fortawesome/react-fontawesome"),
    dep("@reduxjs/toolkit"),
    dep("@react-native-async-storage/async-storage"),
    dep("@react-native-community/datetimepicker"),
    dep("@react-native-community/picker"),
    dep("@react-native-community/slider"),
    dep("@react-navigation/bottom-tabs"),
    dep("@react-navigation/native"),
    dep("@react-navigation/native-stack"),
    dep("antd"),
    dep("formik"),
    dep("lottie-react-native"),
    dep("moment"),
    dep("react-native-app-intro-slider"),
    dep("react-native-gesture-handler"),
    dep("react-native-get-random-values"),
    dep("react-native-keyboard-aware-scroll-view"),
    dep("react-native-modal"),
    dep("react-native-reanimated"),
    dep("react-native-safe-area-context"),
    dep("react-native-screens"),
    dep("react-native-svg"),
    dep("react-native-vector-icons"),
    dep("react-redux"),
    dep("react-router-dom"),
    dep("rn-glitch-effect"),
    dep("styled-components"),
    dep("socket.io-client"),
    dep("toggle-switch-react-native"),
    dep("uuid"),
];

const EXPO: &[Dependency] = &[
    dep("@fortawesome/fontawesome-svg-core"),
    dep("@fortawesome/free-solid-svg-icons"),
    dep("@fortawesome/react-fontawesome"),
    dep("@reduxjs/toolkit"),
    dep("@expo/webpack-config"),
    dep("@react-native-async-storage/async-storage"),
    dep("@react-native-community/datetimepicker"),
    dep("@react-native-community/picker"),
    dep("@react-native-community/slider"),
    dep("@react-navigation/bottom-tabs"),
    dep("@react-navigation/native"),
    dep("@react-navigation/native-stack"),
    dep("antd"),
    dep("formik"),
    dep("expo"),
    dep("expo-camera"),
    dep("expo-checkbox"),
    dep("expo-font"),
    dep("expo-image-picker"),
    dep("expo-linear-gradient"),
    dep("expo-splash-screen"),
    dep("expo-status-bar"),
    dep("expo-updates"),
    dep("lottie-react-native"),
    dep("moment"),
    dep("react-moment"),
    dep("react-native"),
    dep("react-native-app-intro-slider"),
    dep("react-native-gesture-handler"),
    dep("react-native-get-random-values"),
    dep("react-native-keyboard-aware-scroll-view"),
    dep("react-native-modal"),
    dep("react-native-reanimated"),
    dep("react-native-safe-area-context"),
    dep("react-native-screens"),
    dep("react-native-svg"),
    dep("react-native-vector-icons"),
    dep("react-redux"),
    dep("react-router-dom"),
    dep("rn-glitch-effect"),
    dep("styled-components"),
    dep("socket.io-client"),
    dep("toggle-switch-react-native"),
    dep("uuid"),
];

const BACKEND: &[Dependency] = &[
    dep("cors"),
    dep("node-fetch@2"),
    dep_then("dotenv", PostInstall::EnvFile),
    dep("jest"),
    dep("supertest"),
    dep_then("mongoose", PostInstall::ConnectionStub),
];

/// Optional dependencies offered for `project_type`, in display order.
pub fn dependencies(project_type: ProjectType) -> &'static [Dependency] {
    match project_type {
        ProjectType::React | ProjectType::Next => WEB,
        ProjectType::ReactNative => REACT_NATIVE,
        ProjectType::Expo => EXPO,
        ProjectType::Backend => BACKEND,
    }
}
