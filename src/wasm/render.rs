
use glam::Mat4;
use web_sys::{
    HtmlCanvasElement, WebGl2RenderingContext as GL, WebGlBuffer, WebGlProgram, WebGlShader,
    WebGlTexture, WebGlUniformLocation, WebGlVertexArrayObject,
};

use crate::background::SceneRenderer;
use crate::error::{CosmicError, Result};
use crate::scene::{Blending, Layer, Scene};
use crate::viewport::Viewport;

const VERTEX_SHADER: &str = r#"#version 300 es
in vec3 a_position;
in vec3 a_color;

uniform mat4 u_model;
uniform mat4 u_view;
uniform mat4 u_projection;
uniform float u_size;
uniform float u_scale;
uniform bool u_size_attenuation;

out vec3 v_color;
out float v_depth;

void main() {
    vec4 mv = u_view * u_model * vec4(a_position, 1.0);
    gl_Position = u_projection * mv;

    float size = u_size;
    if (u_size_attenuation) {
        size *= u_scale / -mv.z;
    }
    gl_PointSize = size;

    v_color = a_color;
    v_depth = -mv.z;
}
"#;

const FRAGMENT_SHADER: &str = r#"#version 300 es
precision mediump float;

in vec3 v_color;
in float v_depth;

uniform sampler2D u_sprite;
uniform vec3 u_tint;
uniform float u_opacity;
uniform vec3 u_fog_color;
uniform float u_fog_density;

out vec4 out_color;

void main() {
    vec4 color = vec4(u_tint * v_color, u_opacity) * texture(u_sprite, gl_PointCoord);
    float fog = 1.0 - exp(-u_fog_density * u_fog_density * v_depth * v_depth);
    color.rgb = mix(color.rgb, u_fog_color, clamp(fog, 0.0, 1.0));
    out_color = color;
}
"#;

const ATTR_POSITION: u32 = 0;
const ATTR_COLOR: u32 = 1;

struct Uniforms {
    model: Option<WebGlUniformLocation>,
    view: Option<WebGlUniformLocation>,
    projection: Option<WebGlUniformLocation>,
    size: Option<WebGlUniformLocation>,
    scale: Option<WebGlUniformLocation>,
    size_attenuation: Option<WebGlUniformLocation>,
    sprite: Option<WebGlUniformLocation>,
    tint: Option<WebGlUniformLocation>,
    opacity: Option<WebGlUniformLocation>,
    fog_color: Option<WebGlUniformLocation>,
    fog_density: Option<WebGlUniformLocation>,
}

impl Uniforms {
    fn locate(gl: &GL, program: &WebGlProgram) -> Self {
        let at = |name: &str| gl.get_uniform_location(program, name);
        Self {
            model: at("u_model"),
            view: at("u_view"),
            projection: at("u_projection"),
            size: at("u_size"),
            scale: at("u_scale"),
            size_attenuation: at("u_size_attenuation"),
            sprite: at("u_sprite"),
            tint: at("u_tint"),
            opacity: at("u_opacity"),
            fog_color: at("u_fog_color"),
            fog_density: at("u_fog_density"),
        }
    }
}

/// GPU copy of one layer's static vertex data.
struct LayerBuffers {
    vao: WebGlVertexArrayObject,
    count: i32,
    _buffers: Vec<WebGlBuffer>,
}

/// Draws the scene's point layers with WebGL2.
pub struct WebGlRenderer {
    gl: GL,
    canvas: HtmlCanvasElement,
    program: WebGlProgram,
    uniforms: Uniforms,
    sprite: WebGlTexture,
    layers: Vec<LayerBuffers>,
}

impl WebGlRenderer {
    /// Compile shaders and upload every layer's buffers and the sprite once.
    pub fn new(gl: GL, canvas: HtmlCanvasElement, scene: &Scene) -> Result<Self> {
        let vs = compile_shader(&gl, GL::VERTEX_SHADER, VERTEX_SHADER)?;
        let fs = compile_shader(&gl, GL::FRAGMENT_SHADER, FRAGMENT_SHADER)?;
        let program = link_program(&gl, &vs, &fs)?;
        let uniforms = Uniforms::locate(&gl, &program);
        let sprite = upload_sprite(&gl, scene)?;

        let layers = scene
            .layers()
            .iter()
            .map(|layer| upload_layer(&gl, layer))
            .collect::<Result<Vec<_>>>()?;

        gl.clear_color(0.0, 0.0, 0.0, 0.0);
        gl.enable(GL::DEPTH_TEST);

        Ok(Self {
            gl,
            canvas,
            program,
            uniforms,
            sprite,
            layers,
        })
    }

    fn draw_layer(&self, layer: &Layer, buffers: &LayerBuffers, viewport: &Viewport) {
        let gl = &self.gl;
        let m = &layer.material;
        let scale = layer.point_scale(viewport);

        match m.blending {
            Blending::Additive => gl.blend_func(GL::SRC_ALPHA, GL::ONE),
            Blending::Normal => gl.blend_func(GL::SRC_ALPHA, GL::ONE_MINUS_SRC_ALPHA),
        }

        gl.uniform_matrix4fv_with_f32_array(
            self.uniforms.model.as_ref(),
            false,
            &layer.model_matrix().to_cols_array(),
        );
        gl.uniform1f(self.uniforms.size.as_ref(), scale.size);
        gl.uniform1i(
            self.uniforms.size_attenuation.as_ref(),
            scale.attenuation.is_some() as i32,
        );
        gl.uniform1f(self.uniforms.scale.as_ref(), scale.attenuation.unwrap_or(1.0));
        gl.uniform3fv_with_f32_array(self.uniforms.tint.as_ref(), &m.color.to_array());
        gl.uniform1f(self.uniforms.opacity.as_ref(), m.opacity);

        gl.bind_vertex_array(Some(&buffers.vao));
        // layers without per-point colors fall back to a constant attribute
        if layer.cloud.colors.is_none() {
            gl.vertex_attrib3f(ATTR_COLOR, 1.0, 1.0, 1.0);
        }
        gl.draw_arrays(GL::POINTS, 0, buffers.count);
        gl.bind_vertex_array(None);
    }
}

impl SceneRenderer for WebGlRenderer {
    fn resize(&mut self, viewport: &Viewport) {
        let (w, h) = viewport.size();
        let (bw, bh) = viewport.drawing_buffer_size();
        self.canvas.set_width(bw);
        self.canvas.set_height(bh);
        let style = self.canvas.style();
        style.set_property("width", &format!("{}px", w)).ok();
        style.set_property("height", &format!("{}px", h)).ok();
        self.gl.viewport(0, 0, bw as i32, bh as i32);
    }

    fn render(&mut self, scene: &Scene, viewport: &Viewport) {
        let gl = &self.gl;
        gl.clear(GL::COLOR_BUFFER_BIT | GL::DEPTH_BUFFER_BIT);
        gl.use_program(Some(&self.program));

        let view: Mat4 = viewport.view_matrix();
        let projection: Mat4 = viewport.projection_matrix();
        let u = &self.uniforms;
        gl.uniform_matrix4fv_with_f32_array(u.view.as_ref(), false, &view.to_cols_array());
        gl.uniform_matrix4fv_with_f32_array(u.projection.as_ref(), false, &projection.to_cols_array());
        gl.uniform3fv_with_f32_array(u.fog_color.as_ref(), &scene.fog.color.to_array());
        gl.uniform1f(u.fog_density.as_ref(), scene.fog.density);

        gl.active_texture(GL::TEXTURE0);
        gl.bind_texture(GL::TEXTURE_2D, Some(&self.sprite));
        gl.uniform1i(u.sprite.as_ref(), 0);

        gl.enable(GL::BLEND);
        gl.depth_mask(false);
        for (layer, buffers) in scene.layers().into_iter().zip(&self.layers) {
            self.draw_layer(layer, buffers, viewport);
        }
        gl.depth_mask(true);
    }
}

fn compile_shader(gl: &GL, kind: u32, source: &str) -> Result<WebGlShader> {
    let shader = gl
        .create_shader(kind)
        .ok_or_else(|| CosmicError::Shader("unable to create shader".into()))?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);

    if gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(shader)
    } else {
        Err(CosmicError::Shader(
            gl.get_shader_info_log(&shader)
                .unwrap_or_else(|| "unknown compile error".into()),
        ))
    }
}

fn link_program(gl: &GL, vs: &WebGlShader, fs: &WebGlShader) -> Result<WebGlProgram> {
    let program = gl
        .create_program()
        .ok_or_else(|| CosmicError::Shader("unable to create program".into()))?;
    gl.attach_shader(&program, vs);
    gl.attach_shader(&program, fs);
    gl.bind_attrib_location(&program, ATTR_POSITION, "a_position");
    gl.bind_attrib_location(&program, ATTR_COLOR, "a_color");
    gl.link_program(&program);

    if gl
        .get_program_parameter(&program, GL::LINK_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(program)
    } else {
        Err(CosmicError::Shader(
            gl.get_program_info_log(&program)
                .unwrap_or_else(|| "unknown link error".into()),
        ))
    }
}

fn upload_attribute(gl: &GL, location: u32, components: i32, data: &[f32]) -> Result<WebGlBuffer> {
    let buffer = gl
        .create_buffer()
        .ok_or_else(|| CosmicError::Dom("unable to create buffer".into()))?;
    gl.bind_buffer(GL::ARRAY_BUFFER, Some(&buffer));
    let array = js_sys::Float32Array::from(data);
    gl.buffer_data_with_array_buffer_view(GL::ARRAY_BUFFER, &array, GL::STATIC_DRAW);
    gl.enable_vertex_attrib_array(location);
    gl.vertex_attrib_pointer_with_i32(location, components, GL::FLOAT, false, 0, 0);
    Ok(buffer)
}

fn upload_layer(gl: &GL, layer: &Layer) -> Result<LayerBuffers> {
    let vao = gl
        .create_vertex_array()
        .ok_or_else(|| CosmicError::Dom("unable to create vertex array".into()))?;
    gl.bind_vertex_array(Some(&vao));

    let cloud = &layer.cloud;
    let mut buffers = vec![upload_attribute(gl, ATTR_POSITION, 3, &cloud.position_data())?];
    if let Some(colors) = cloud.color_data() {
        buffers.push(upload_attribute(gl, ATTR_COLOR, 3, &colors)?);
    }

    gl.bind_vertex_array(None);
    gl.bind_buffer(GL::ARRAY_BUFFER, None);
    log::debug!("uploaded {} layer: {} points", layer.name, cloud.len());

    Ok(LayerBuffers {
        vao,
        count: cloud.len() as i32,
        _buffers: buffers,
    })
}

fn upload_sprite(gl: &GL, scene: &Scene) -> Result<WebGlTexture> {
    let sprite = &scene.sprite;
    let texture = gl
        .create_texture()
        .ok_or_else(|| CosmicError::Dom("unable to create texture".into()))?;
    gl.bind_texture(GL::TEXTURE_2D, Some(&texture));
    gl.tex_image_2d_with_i32_and_i32_and_i32_and_format_and_type_and_opt_u8_array(
        GL::TEXTURE_2D,
        0,
        GL::RGBA as i32,
        sprite.size() as i32,
        sprite.size() as i32,
        0,
        GL::RGBA,
        GL::UNSIGNED_BYTE,
        Some(sprite.pixels()),
    )?;
    gl.generate_mipmap(GL::TEXTURE_2D);
    gl.tex_parameteri(GL::TEXTURE_2D, GL::TEXTURE_MIN_FILTER, GL::LINEAR_MIPMAP_LINEAR as i32);
    gl.tex_parameteri(GL::TEXTURE_2D, GL::TEXTURE_MAG_FILTER, GL::LINEAR as i32);
    gl.tex_parameteri(GL::TEXTURE_2D, GL::TEXTURE_WRAP_S, GL::CLAMP_TO_EDGE as i32);
    gl.tex_parameteri(GL::TEXTURE_2D, GL::TEXTURE_WRAP_T, GL::CLAMP_TO_EDGE as i32);
    gl.bind_texture(GL::TEXTURE_2D, None);
    Ok(texture)
}
