use crate::color;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Palette {
    pub general: General,
    pub text: Text,
    pub buttons: Buttons,
    pub text_inputs: TextInputs,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct General {
    pub background: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Text {
    pub primary: iced::Color,
    pub secondary: iced::Color,
    pub warning: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Buttons {
    pub primary: Button,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Button {
    pub active: ButtonPalette,
    pub hovered: ButtonPalette,
    pub pressed: Option<ButtonPalette>,
    pub disabled: Option<ButtonPalette>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ButtonPalette {
    pub background: iced::Color,
    pub text: iced::Color,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInputs {
    pub primary: TextInput,
    pub invalid: TextInput,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInput {
    pub active: TextInputPalette,
    pub disabled: TextInputPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInputPalette {
    pub background: iced::Color,
    pub icon: iced::Color,
    pub placeholder: iced::Color,
    pub value: iced::Color,
    pub selection: iced::Color,
    pub border: Option<iced::Color>,
}

impl std::default::Default for Palette {
    fn default() -> Self {
        Self {
            general: General {
                background: color::LIGHT_BLACK,
            },
            text: Text {
                primary: color::WHITE,
                secondary: color::GREY_3,
                warning: color::ORANGE,
            },
            buttons: Buttons {
                primary: Button {
                    active: ButtonPalette {
                        background: color::CORAL,
                        text: color::LIGHT_BLACK,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::WHITE,
                        text: color::LIGHT_BLACK,
                        border: None,
                    },
                    pressed: Some(ButtonPalette {
                        background: color::GREY_2,
                        text: color::LIGHT_BLACK,
                        border: None,
                    }),
                    disabled: Some(ButtonPalette {
                        background: color::GREY_6,
                        text: color::GREY_2,
                        border: None,
                    }),
                },
            },
            text_inputs: TextInputs {
                primary: TextInput {
                    active: TextInputPalette {
                        background: color::GREY_6,
                        icon: color::GREY_3,
                        placeholder: color::GREY_3,
                        value: color::WHITE,
                        selection: color::CORAL,
                        border: color::GREY_4.into(),
                    },
                    disabled: TextInputPalette {
                        background: color::LIGHT_BLACK,
                        icon: color::GREY_4,
                        placeholder: color::GREY_4,
                        value: color::GREY_3,
                        selection: color::GREY_4,
                        border: color::GREY_6.into(),
                    },
                },
                invalid: TextInput {
                    active: TextInputPalette {
                        background: color::GREY_6,
                        icon: color::GREY_3,
                        placeholder: color::GREY_3,
                        value: color::WHITE,
                        selection: color::CORAL,
                        border: color::RED.into(),
                    },
                    disabled: TextInputPalette {
                        background: color::LIGHT_BLACK,
                        icon: color::GREY_4,
                        placeholder: color::GREY_4,
                        value: color::GREY_3,
                        selection: color::GREY_4,
                        border: color::RED.into(),
                    },
                },
            },
        }
    }
}
